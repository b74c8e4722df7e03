//! Syntax and execution errors.
//!
//! The two taxonomies are disjoint: compilation only ever fails with a
//! [`SyntaxError`], evaluation only ever fails with an [`ExecutionError`].

use tally_common::Span;
use tally_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use tally_parser::{ParseError, ParseErrorKind};
use thiserror::Error;

/// Why compilation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("invalid input encoding")]
    InvalidEncoding,

    #[error("invalid token")]
    InvalidToken,

    #[error("unexpected token")]
    UnexpectedToken,

    #[error("incomplete input")]
    IncompleteInput,

    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// A compilation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error: {kind} at {span:?}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            SyntaxErrorKind::InvalidEncoding => ErrorCode::InvalidEncoding,
            SyntaxErrorKind::InvalidToken => ErrorCode::InvalidToken,
            SyntaxErrorKind::UnexpectedToken => ErrorCode::UnexpectedToken,
            SyntaxErrorKind::IncompleteInput => ErrorCode::IncompleteInput,
            SyntaxErrorKind::NestingTooDeep { .. } => ErrorCode::NestingTooDeep,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let kind = match self.kind {
            SyntaxErrorKind::InvalidEncoding | SyntaxErrorKind::InvalidToken => {
                DiagnosticKind::Lexer
            }
            _ => DiagnosticKind::Parser,
        };
        Diagnostic::from_code(kind, self.code(), self.span, self.kind.to_string())
            .with_label(Label::new(self.span, self.code().description()))
    }
}

impl From<ParseError> for SyntaxError {
    fn from(err: ParseError) -> Self {
        let kind = match err.kind {
            ParseErrorKind::InvalidInput => SyntaxErrorKind::InvalidEncoding,
            ParseErrorKind::InvalidToken => SyntaxErrorKind::InvalidToken,
            ParseErrorKind::UnexpectedToken => SyntaxErrorKind::UnexpectedToken,
            ParseErrorKind::MoreInputNeeded => SyntaxErrorKind::IncompleteInput,
            ParseErrorKind::NestingTooDeep { limit } => SyntaxErrorKind::NestingTooDeep { limit },
        };
        SyntaxError::new(kind, err.span)
    }
}

/// An evaluation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    #[error("parameter error: {0}")]
    ParameterError(String),

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("variable `{0}` refers to itself")]
    CyclicVariable(String),

    #[error("evaluation nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("unknown error")]
    UnknownError,
}

impl ExecutionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExecutionError::UnknownVariable(_) => ErrorCode::UnknownVariable,
            ExecutionError::ParameterError(_) => ErrorCode::ParameterError,
            ExecutionError::TypeMismatch(_) => ErrorCode::TypeMismatch,
            ExecutionError::CyclicVariable(_) => ErrorCode::CyclicVariable,
            ExecutionError::NestingTooDeep { .. } => ErrorCode::EvaluationTooDeep,
            ExecutionError::UnknownError => ErrorCode::UnknownError,
        }
    }

    /// Build a diagnostic pointing at `span`, usually the whole expression.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        let diagnostic = Diagnostic::from_code(DiagnosticKind::Eval, self.code(), span, self.to_string());
        match self {
            ExecutionError::TypeMismatch(_) => {
                diagnostic.with_note("only numbers can be used with + - * / and unary -")
            }
            _ => diagnostic,
        }
    }
}
