//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic construction and rendering.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, LexErrorKind};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidStatement {
            found: "WHILE".to_string(),
        },
        Position::new(3, 1),
    );

    assert_eq!(error.get_error_name(), "InvalidStatement");
    assert_eq!(error.expected(), "a statement");
    assert_eq!(error.found(), "WHILE");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "an identifier".to_string(),
            found: "end of line".to_string(),
        },
        Position::new(4, 8),
    );

    assert_eq!(error.line(), 4);
    assert_eq!(error.column(), 8);
    assert_eq!(*error.get_position(), Position::new(4, 8));
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "an identifier".to_string(),
            found: "end of line".to_string(),
        },
        Position::new(1, 8),
    );

    assert_eq!(
        error.to_string(),
        "line 1, col 8; expected an identifier, got end of line"
    );
}

#[test]
fn test_illegal_token_error() {
    let error = Error::new(
        ErrorImpl::IllegalToken {
            kind: LexErrorKind::UnterminatedString,
            found: "\"abc".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(error.get_error_name(), "IllegalToken");
    assert_eq!(error.expected(), "a closing double quote on the same line");
    assert_eq!(
        error.to_string(),
        "line 1, col 1; expected a closing double quote on the same line, got \"abc"
    );
}

#[test]
fn test_invalid_callee_error() {
    let error = Error::new(
        ErrorImpl::InvalidCallee {
            operator: "[".to_string(),
            found: "a(1)".to_string(),
        },
        Position::new(1, 5),
    );

    assert_eq!(error.get_error_name(), "InvalidCallee");
    assert_eq!(error.expected(), "an identifier before `[`");
    assert_eq!(error.found(), "a(1)");
}

#[test]
fn test_invalid_lower_bound_error() {
    let error = Error::new(
        ErrorImpl::InvalidLowerBound {
            found: "0".to_string(),
        },
        Position::new(2, 19),
    );

    assert_eq!(error.get_error_name(), "InvalidLowerBound");
    assert_eq!(error.expected(), "lower bound 1");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`:`".to_string(),
            found: "INTEGER".to_string(),
        },
        Position::new(1, 11),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `:`, found `INTEGER`"),
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

#[test]
fn test_lex_error_kind_messages() {
    assert_eq!(
        LexErrorKind::MalformedNumber.expected(),
        "a number with at most one decimal point"
    );
    assert_eq!(
        LexErrorKind::MalformedChar.to_string(),
        "Single quotes must be in pairs and can only contain a single character"
    );
    assert_eq!(LexErrorKind::UnrecognisedCharacter.expected(), "a valid character");
}

#[test]
fn test_nesting_too_deep() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep {
            found: String::from("("),
        },
        Position::new(1, 262),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.expected(), "at most 256 nested expressions");
    assert_eq!(
        error.to_string(),
        "line 1, col 262; expected at most 256 nested expressions, got ("
    );
}
