use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::ExpectedCloseParen { .. } => "ExpectedCloseParen",
            ErrorImpl::ExpectedArgumentSeparator { .. } => "ExpectedArgumentSeparator",
            ErrorImpl::ExpectedFunctionName { .. } => "ExpectedFunctionName",
            ErrorImpl::ExpectedPrototypeOpenParen { .. } => "ExpectedPrototypeOpenParen",
            ErrorImpl::ExpectedPrototypeCloseParen { .. } => "ExpectedPrototypeCloseParen",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownToken { token } => {
                ErrorTip::Suggestion(format!("Found `{}` where an expression should start", token))
            }
            ErrorImpl::ExpectedCloseParen { token } => {
                ErrorTip::Suggestion(format!("Found `{}`, is a `)` missing?", token))
            }
            ErrorImpl::ExpectedArgumentSeparator { token } => ErrorTip::Suggestion(format!(
                "Found `{}`, arguments are separated by `,` and closed by `)`",
                token
            )),
            ErrorImpl::ExpectedFunctionName { .. } => ErrorTip::None,
            ErrorImpl::ExpectedPrototypeOpenParen { token } => ErrorTip::Suggestion(format!(
                "Found `{}`, parameters go in parentheses after the name",
                token
            )),
            ErrorImpl::ExpectedPrototypeCloseParen { token } => ErrorTip::Suggestion(format!(
                "Found `{}`, parameter names are separated by whitespace",
                token
            )),
        }
    }

    /// The line written to the diagnostic channel for this error.
    pub fn diagnostic(&self) -> String {
        format!("Error {}", self)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Each variant records the token that was found instead of the expected one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unknown token when expecting an expression")]
    UnknownToken { token: String },
    #[error("expected ')'")]
    ExpectedCloseParen { token: String },
    #[error("expected ')' or ',' in argument list")]
    ExpectedArgumentSeparator { token: String },
    #[error("expected function name in prototype")]
    ExpectedFunctionName { token: String },
    #[error("expected '(' in prototype")]
    ExpectedPrototypeOpenParen { token: String },
    #[error("expected ')' in prototype")]
    ExpectedPrototypeCloseParen { token: String },
}
