//! CLI command implementations.

pub mod eval;
pub mod highlight;
pub mod repl;
pub mod tree;
