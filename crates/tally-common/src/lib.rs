//! Common utilities and data structures for tally.
//!
//! This crate provides the foundational types shared by every stage of the
//! pipeline:
//! - `BytePos`: a byte offset into source text
//! - `Span`: a half-open byte range, used for diagnostics and presentation

mod span;

pub use span::{BytePos, Span};
