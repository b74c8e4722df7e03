//! Error codes for tally diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Input errors (E0001 - E0099)
    InvalidEncoding,
    InvalidToken,

    // Syntax errors (E0100 - E0199)
    UnexpectedToken,
    IncompleteInput,
    NestingTooDeep,

    // Execution errors (E0200 - E0299)
    UnknownVariable,
    ParameterError,
    TypeMismatch,
    CyclicVariable,
    EvaluationTooDeep,
    UnknownError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidEncoding => "E0001",
            ErrorCode::InvalidToken => "E0002",

            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::IncompleteInput => "E0101",
            ErrorCode::NestingTooDeep => "E0102",

            ErrorCode::UnknownVariable => "E0200",
            ErrorCode::ParameterError => "E0201",
            ErrorCode::TypeMismatch => "E0202",
            ErrorCode::CyclicVariable => "E0203",
            ErrorCode::EvaluationTooDeep => "E0204",
            ErrorCode::UnknownError => "E0299",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidEncoding => "source is not valid UTF-8",
            ErrorCode::InvalidToken => "invalid token in input",

            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::IncompleteInput => "expression is incomplete",
            ErrorCode::NestingTooDeep => "expression is nested too deeply",

            ErrorCode::UnknownVariable => "cannot find a binding for this name",
            ErrorCode::ParameterError => "function arguments do not match its contract",
            ErrorCode::TypeMismatch => "mismatched types",
            ErrorCode::CyclicVariable => "variable refers back to itself",
            ErrorCode::EvaluationTooDeep => "expression tree is nested too deeply to evaluate",
            ErrorCode::UnknownError => "unknown error",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::IncompleteInput => Some("finish the expression or close the open parenthesis"),
            ErrorCode::UnknownVariable => Some("check the spelling or bind the name in the environment"),
            ErrorCode::ParameterError => Some("check how many arguments the function takes"),
            ErrorCode::CyclicVariable => Some("bind one of the names in the cycle to a value"),
            ErrorCode::NestingTooDeep | ErrorCode::EvaluationTooDeep => {
                Some("split the expression or raise the depth limit")
            }
            _ => None,
        }
    }
}
