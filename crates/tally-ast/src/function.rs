//! Callable functions.

use std::fmt;
use std::sync::Arc;

use crate::{ExecutionError, Value};

type Body = dyn Fn(&[Value]) -> Result<Value, ExecutionError> + Send + Sync;

/// A named callable.
///
/// Two functions compare equal when their ids match. Equality says nothing
/// about behavior: two functions registered under the same id with different
/// bodies are indistinguishable to `==`.
#[derive(Clone)]
pub struct Function {
    id: Arc<str>,
    body: Arc<Body>,
}

impl Function {
    pub fn new<F>(id: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, ExecutionError> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            body: Arc::new(body),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Invoke the function with already resolved arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value, ExecutionError> {
        tracing::trace!(function = %self.id, argc = args.len(), "call");
        (self.body)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.id)
    }
}

/// Fail with `ParameterError` unless exactly `n` arguments were passed.
pub fn expect_arity(args: &[Value], n: usize) -> Result<(), ExecutionError> {
    if args.len() == n {
        return Ok(());
    }
    let plural = if n == 1 { "" } else { "s" };
    Err(ExecutionError::ParameterError(format!(
        "expected {} argument{}, got {}",
        n,
        plural,
        args.len()
    )))
}

/// Extract every argument as a number, failing with `ParameterError` on the
/// first one that is not.
pub fn numbers(args: &[Value]) -> Result<Vec<f64>, ExecutionError> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| {
            arg.as_number().ok_or_else(|| {
                ExecutionError::ParameterError(format!(
                    "argument {} must be a number, got {}",
                    i + 1,
                    arg.type_name()
                ))
            })
        })
        .collect()
}
