//! Runtime values.

use std::fmt;

use crate::Function;

/// A runtime value.
///
/// `Variable` is a late-bound name that still has to be looked up in an
/// environment; every other variant is grounded.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Floating point number
    Number(f64),
    /// Integer value
    Integer(i64),
    /// String value
    String(String),
    /// Unresolved reference to a name in the environment
    Variable(String),
    /// Callable function
    Function(Function),
}

impl Value {
    pub fn variable(name: impl Into<String>) -> Self {
        Value::Variable(name.into())
    }

    /// Try to get as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Returns true unless this is a `Variable` reference.
    pub fn is_grounded(&self) -> bool {
        !matches!(self, Value::Variable(_))
    }

    /// Get the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::Variable(_) => "variable",
            Value::Function(_) => "function",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Integer(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Variable(name) => write!(f, "{}", name),
            Value::Function(func) => write!(f, "<function {}>", func.id()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}
