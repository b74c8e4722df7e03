//! Standard library for tally.
//! tally 标准库。
//!
//! This crate provides the built-in functions and constants. They reach the
//! evaluator only through an [`Environment`]; the evaluator itself knows no
//! function names.
//! 本 crate 提供内置函数和常量。

mod math;

use tally_ast::Value;
use tally_eval::Environment;

/// Math functions and constants.
/// 数学函数与常量。
pub fn math() -> Vec<(&'static str, Value)> {
    let mut bindings = Vec::new();
    bindings.extend(math::builtins());
    bindings.extend(math::constants());
    bindings
}

/// Initialize the standard library and return all built-in bindings.
/// 初始化标准库并返回所有内置绑定。
pub fn prelude() -> Vec<(&'static str, Value)> {
    math()
}

/// An environment holding the whole prelude.
pub fn environment() -> Environment {
    prelude().into_iter().collect()
}
