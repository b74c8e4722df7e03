//! Math functions and constants.
//! 数学函数与常量。

use rand::Rng;
use tally_ast::{ExecutionError, Function, Value, expect_arity, numbers};

/// Returns all math builtins.
/// 返回所有数学内置函数。
pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![
        // Trigonometry / 三角函数
        unary("sin", f64::sin),
        unary("cos", f64::cos),
        unary("tan", f64::tan),
        // Roots, logs, rounding / 开方、对数与取整
        unary("sqrt", f64::sqrt),
        unary("abs", f64::abs),
        unary("ln", f64::ln),
        unary("exp", f64::exp),
        unary("floor", f64::floor),
        unary("ceil", f64::ceil),
        unary("round", f64::round),
        // Two arguments / 二元函数
        binary("pow", f64::powf),
        binary("min", f64::min),
        binary("max", f64::max),
        (
            "random",
            Value::Function(Function::new("random", |args: &[Value]| {
                checked("random", args, 0)?;
                Ok(Value::Number(rand::thread_rng().gen_range(0.0..=1.0)))
            })),
        ),
    ]
}

/// Returns the named constants.
/// 返回命名常量。
pub fn constants() -> Vec<(&'static str, Value)> {
    vec![
        ("pi", Value::Number(std::f64::consts::PI)),
        ("e", Value::Number(std::f64::consts::E)),
        ("tau", Value::Number(std::f64::consts::TAU)),
        ("inf", Value::Number(f64::INFINITY)),
        ("nan", Value::Number(f64::NAN)),
    ]
}

fn unary(name: &'static str, f: fn(f64) -> f64) -> (&'static str, Value) {
    let function = Function::new(name, move |args: &[Value]| {
        let n = checked(name, args, 1)?;
        Ok(Value::Number(f(n[0])))
    });
    (name, Value::Function(function))
}

fn binary(name: &'static str, f: fn(f64, f64) -> f64) -> (&'static str, Value) {
    let function = Function::new(name, move |args: &[Value]| {
        let n = checked(name, args, 2)?;
        Ok(Value::Number(f(n[0], n[1])))
    });
    (name, Value::Function(function))
}

/// Check arity and argument types, prefixing errors with the function name.
fn checked(name: &str, args: &[Value], arity: usize) -> Result<Vec<f64>, ExecutionError> {
    expect_arity(args, arity)
        .and_then(|()| numbers(args))
        .map_err(|err| match err {
            ExecutionError::ParameterError(msg) => {
                ExecutionError::ParameterError(format!("{}: {}", name, msg))
            }
            other => other,
        })
}
