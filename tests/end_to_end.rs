//! End-to-end tests: source text through compilation and execution.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tally_ast::{
    Atom, ExecutionError, Function, SyntaxErrorKind, Value, compile, expect_arity, numbers,
};
use tally_eval::{Environment, Executor, execute};

fn unary_sine() -> Function {
    Function::new("sin", |args: &[Value]| {
        expect_arity(args, 1)?;
        Ok(Value::Number(numbers(args)?[0].sin()))
    })
}

fn same(a: &Result<Value, ExecutionError>, b: &Result<Value, ExecutionError>) -> bool {
    match (a, b) {
        (Ok(Value::Number(x)), Ok(Value::Number(y))) => x == y || (x.is_nan() && y.is_nan()),
        _ => a == b,
    }
}

// ========== Worked examples ==========

#[test]
fn test_sine_times_ten_times_pi() {
    let env = Environment::new()
        .with("pi", std::f64::consts::PI)
        .with_function(unary_sine());
    let result = execute(&compile("sin(1) * 10 * pi").unwrap(), &env);
    assert_eq!(
        result,
        Ok(Value::Number(1f64.sin() * 10.0 * std::f64::consts::PI))
    );
}

#[test]
fn test_divide_by_zero_is_infinity() {
    let result = execute(&compile("1 / 0").unwrap(), &Environment::new());
    assert_eq!(result, Ok(Value::Number(f64::INFINITY)));
}

#[test]
fn test_unbound_variable() {
    let result = execute(&compile("x + 1").unwrap(), &Environment::new());
    assert_eq!(result, Err(ExecutionError::UnknownVariable("x".into())));
}

#[test]
fn test_parens_add_no_node() {
    let program = compile("2 * (3 + 4)").unwrap();
    assert_eq!(execute(&program, &Environment::new()), Ok(Value::Number(14.0)));
    assert_eq!(program.nodes().count(), 5);
    assert!(matches!(program.root().children()[1].atom(), Atom::Plus(..)));
}

#[test]
fn test_sine_with_two_arguments() {
    let env = Environment::new().with_function(unary_sine());
    let result = execute(&compile("sin(1, 2)").unwrap(), &env);
    assert!(matches!(result, Err(ExecutionError::ParameterError(_))));
}

#[test]
fn test_dangling_operator_never_evaluates() {
    let err = compile("1 + ").unwrap_err();
    assert!(matches!(
        err.kind,
        SyntaxErrorKind::IncompleteInput | SyntaxErrorKind::UnexpectedToken
    ));
}

#[test]
fn test_late_binding() {
    let program = compile("area(r)").unwrap();
    let area = Function::new("area", |args: &[Value]| {
        expect_arity(args, 1)?;
        let r = numbers(args)?[0];
        Ok(Value::Number(std::f64::consts::PI * r * r))
    });

    let small = Environment::new().with_function(area.clone()).with("r", 1.0);
    let large = Environment::new().with_function(area).with("r", 2.0);
    assert_eq!(execute(&program, &small), Ok(Value::Number(std::f64::consts::PI)));
    assert_eq!(execute(&program, &large), Ok(Value::Number(std::f64::consts::PI * 4.0)));
}

#[test]
fn test_result_is_always_grounded() {
    let env = tally_std::environment()
        .with("a", Value::variable("b"))
        .with("b", Value::variable("pi"));
    let value = execute(&compile("a").unwrap(), &env).unwrap();
    assert!(value.is_grounded());
    assert_eq!(value, Value::Number(std::f64::consts::PI));
}

// ========== Properties ==========

/// Arithmetic expression with a directly computed reference value.
#[derive(Debug, Clone)]
enum Arith {
    Num(f64),
    Neg(Box<Arith>),
    Bin(Box<Arith>, char, Box<Arith>),
}

impl Arith {
    fn source(&self) -> String {
        match self {
            Arith::Num(n) => n.to_string(),
            Arith::Neg(a) => format!("-{}", a.source()),
            Arith::Bin(a, op, b) => format!("({} {} {})", a.source(), op, b.source()),
        }
    }

    fn value(&self) -> f64 {
        match self {
            Arith::Num(n) => *n,
            Arith::Neg(a) => -a.value(),
            Arith::Bin(a, op, b) => apply(a.value(), *op, b.value()),
        }
    }
}

fn apply(a: f64, op: char, b: f64) -> f64 {
    match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        _ => a / b,
    }
}

fn literal() -> impl Strategy<Value = f64> {
    (0u32..100_000).prop_map(|n| f64::from(n) / 100.0)
}

fn operator() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/'])
}

fn arith() -> impl Strategy<Value = Arith> {
    literal().prop_map(Arith::Num).prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|a| Arith::Neg(Box::new(a))),
            (inner.clone(), operator(), inner)
                .prop_map(|(a, op, b)| Arith::Bin(Box::new(a), op, Box::new(b))),
        ]
    })
}

/// Precedence-aware reference for a flat `n0 op0 n1 op1 ...` chain.
fn flat_value(first: f64, rest: &[(char, f64)]) -> f64 {
    let mut terms = vec![('+', first)];
    for &(op, n) in rest {
        match op {
            '*' | '/' => {
                if let Some(last) = terms.last_mut() {
                    last.1 = apply(last.1, op, n);
                }
            }
            _ => terms.push((op, n)),
        }
    }
    let mut acc = terms[0].1;
    for &(op, term) in &terms[1..] {
        acc = apply(acc, op, term);
    }
    acc
}

/// Source text built from numbers, names, calls and operators.
fn mixed_source() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        prop::sample::select(vec!["x", "y", "pi", "nothing"]).prop_map(String::from),
    ];
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), operator(), inner.clone()).prop_map(|(a, op, b)| format!("{a} {op} {b}")),
            inner.clone().prop_map(|a| format!("-{a}")),
            inner.clone().prop_map(|a| format!("({a})")),
            (
                prop::sample::select(vec!["sin", "max"]),
                prop::collection::vec(inner, 1..3)
            )
                .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
        ]
    })
}

proptest! {
    #[test]
    fn prop_parenthesized_arithmetic_matches_ieee(expr in arith()) {
        let program = compile(&expr.source()).unwrap();
        let result = execute(&program, &Environment::new());
        prop_assert!(same(&result, &Ok(Value::Number(expr.value()))), "{} => {:?}", expr.source(), result);
    }

    #[test]
    fn prop_flat_chain_respects_precedence(
        first in literal(),
        rest in prop::collection::vec((operator(), literal()), 0..8),
    ) {
        let mut source = first.to_string();
        for (op, n) in &rest {
            source.push_str(&format!(" {op} {n}"));
        }
        let result = execute(&compile(&source).unwrap(), &Environment::new());
        prop_assert!(same(&result, &Ok(Value::Number(flat_value(first, &rest)))), "{} => {:?}", source, result);
    }

    #[test]
    fn prop_sub_expressions_evaluate_alone(source in mixed_source()) {
        let env = tally_std::environment()
            .with("x", 3.0)
            .with("y", Value::variable("x"));
        let executor = Executor::new(&env);
        let program = compile(&source).unwrap();

        for node in program.nodes() {
            let text = node.location().unwrap().text();
            let direct = executor.evaluate(node).and_then(|v| executor.resolve(v));
            let alone = executor.execute(&compile(text).unwrap());
            prop_assert!(same(&direct, &alone), "{:?} in {:?}: {:?} vs {:?}", text, source, direct, alone);
        }
    }
}
