//! Evaluator for tally.
//!
//! This crate implements a tree-walking evaluator over the nodes produced by
//! `tally-ast`. Names are resolved against an [`Environment`] only when they
//! are needed, so built-ins and constants are late bound.

mod env;
mod executor;

pub use env::Environment;
pub use executor::{DEFAULT_MAX_DEPTH, ExecOptions, Executor};

use tally_ast::{CompiledProgram, ExecutionError, Value};

/// Execute a program with the default options.
pub fn execute(program: &CompiledProgram, env: &Environment) -> Result<Value, ExecutionError> {
    Executor::new(env).execute(program)
}
