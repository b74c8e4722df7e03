//! Parse tree definitions for tally.
//!
//! The grammar produces a flat arena of [`ParsedExpr`] records addressed by
//! [`ExprRef`] handles. Consumers read it through [`ParseTree`] and copy out
//! whatever they need; nothing hands out long-lived references into it.

mod tree;

pub use tree::*;
