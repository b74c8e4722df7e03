//! Parser for tally.
//!
//! This crate provides a recursive descent parser that turns expression
//! source into a [`ParseTree`]. Parsing stops at the first error: there is
//! no recovery and no partial tree.

mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;

use tally_common::Span;
use tally_lexer::{Lexer, TokenKind};
use tally_syntax::ParseTree;

/// Default bound on expression nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting depth of the resulting tree.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse source text with the default options.
pub fn parse(source: &str) -> Result<ParseTree, ParseError> {
    parse_with(source, &ParseOptions::default())
}

/// Parse source text.
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<ParseTree, ParseError> {
    let (tokens, diagnostics) = Lexer::new(source).tokenize();

    if !diagnostics.is_empty() {
        tracing::debug!(count = diagnostics.len(), "lexer reported invalid tokens");
    }
    if let Some(bad) = tokens.iter().find(|t| t.kind == TokenKind::Error) {
        return Err(ParseError::new(ParseErrorKind::InvalidToken, bad.span));
    }

    Parser::new(tokens, *options).parse_program()
}

/// Parse raw bytes, rejecting input that is not UTF-8.
pub fn parse_bytes(source: &[u8], options: &ParseOptions) -> Result<ParseTree, ParseError> {
    match std::str::from_utf8(source) {
        Ok(text) => parse_with(text, options),
        Err(err) => {
            let at = err.valid_up_to();
            let len = err.error_len().unwrap_or(source.len() - at);
            Err(ParseError::new(
                ParseErrorKind::InvalidInput,
                Span::from_usize(at, at + len),
            ))
        }
    }
}
