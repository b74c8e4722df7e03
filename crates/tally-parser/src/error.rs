//! Parse errors.

use tally_common::Span;
use tally_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use thiserror::Error;

/// What went wrong while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("input is not valid UTF-8")]
    InvalidInput,

    #[error("invalid token")]
    InvalidToken,

    #[error("unexpected token")]
    UnexpectedToken,

    #[error("more input needed")]
    MoreInputNeeded,

    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// A parse failure and where it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {span:?}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::InvalidInput => ErrorCode::InvalidEncoding,
            ParseErrorKind::InvalidToken => ErrorCode::InvalidToken,
            ParseErrorKind::UnexpectedToken => ErrorCode::UnexpectedToken,
            ParseErrorKind::MoreInputNeeded => ErrorCode::IncompleteInput,
            ParseErrorKind::NestingTooDeep { .. } => ErrorCode::NestingTooDeep,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let kind = match self.kind {
            ParseErrorKind::InvalidInput | ParseErrorKind::InvalidToken => DiagnosticKind::Lexer,
            _ => DiagnosticKind::Parser,
        };
        Diagnostic::from_code(kind, self.code(), self.span, self.kind.to_string())
            .with_label(Label::new(self.span, "here"))
    }
}
