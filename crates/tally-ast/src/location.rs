//! Source locations.
//! 源码位置。

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use tally_common::Span;

/// A byte range in a program's source text.
/// 程序源码中的字节范围。
///
/// Every node of one program shares the same `Arc<str>`, so cloning a
/// location never copies the source.
#[derive(Clone, PartialEq, Eq)]
pub struct Location {
    source: Arc<str>,
    span: Span,
}

impl Location {
    pub fn new(source: Arc<str>, span: Span) -> Self {
        Self { source, span }
    }

    /// The full source text this location points into.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn range(&self) -> Range<usize> {
        self.span.range()
    }

    /// The text this location covers. Empty if the span does not fit the
    /// source, which only hand-built nodes can cause.
    pub fn text(&self) -> &str {
        self.span.slice(&self.source).unwrap_or("")
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({:?} {:?})", self.span, self.text())
    }
}
