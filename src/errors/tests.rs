//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn error(error_impl: ErrorImpl) -> Error {
    Error::new(error_impl, Position(0, Rc::new("test.toy".to_string())))
}

#[test]
fn test_error_creation() {
    let error = error(ErrorImpl::UnknownToken {
        token: "@".to_string(),
    });

    assert_eq!(error.get_error_name(), "UnknownToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.toy".to_string()));
    let error = Error::new(
        ErrorImpl::ExpectedCloseParen {
            token: "x".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position(), pos);
}

#[test]
fn test_error_messages() {
    let cases = [
        (
            ErrorImpl::UnknownToken { token: ")".to_string() },
            "unknown token when expecting an expression",
        ),
        (
            ErrorImpl::ExpectedCloseParen { token: "x".to_string() },
            "expected ')'",
        ),
        (
            ErrorImpl::ExpectedArgumentSeparator { token: "x".to_string() },
            "expected ')' or ',' in argument list",
        ),
        (
            ErrorImpl::ExpectedFunctionName { token: "(".to_string() },
            "expected function name in prototype",
        ),
        (
            ErrorImpl::ExpectedPrototypeOpenParen { token: "x".to_string() },
            "expected '(' in prototype",
        ),
        (
            ErrorImpl::ExpectedPrototypeCloseParen { token: "<eof>".to_string() },
            "expected ')' in prototype",
        ),
    ];

    for (error_impl, message) in cases {
        assert_eq!(error(error_impl).to_string(), message);
    }
}

#[test]
fn test_diagnostic_line() {
    let error = error(ErrorImpl::ExpectedCloseParen {
        token: "x".to_string(),
    });

    assert_eq!(error.diagnostic(), "Error expected ')'");
}

#[test]
fn test_error_tip_none() {
    let error = error(ErrorImpl::ExpectedFunctionName {
        token: "(".to_string(),
    });

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = error(ErrorImpl::ExpectedArgumentSeparator {
        token: ";".to_string(),
    });

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`;`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
