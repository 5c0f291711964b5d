//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::types::Type;
use crate::errors::errors::{
    CompileError, Error, ErrorImpl, ErrorTip, SemanticError, SemanticErrorKind,
};
use crate::Position;
use std::rc::Rc;

fn position(offset: u32, line: u32) -> Position {
    Position::new(offset, line, Rc::new("test.ch".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(10, 1),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.to_string(), "unrecognised token: \"@\"");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        position(42, 3),
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_line(), 3);
}

#[test]
fn test_unexpected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "print".to_string(),
        },
        position(0, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("did you miss a semicolon?")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_unknown_type_error() {
    let error = Error::new(
        ErrorImpl::UnknownType {
            type_: "i32".to_string(),
        },
        position(7, 1),
    );

    assert_eq!(error.get_error_name(), "UnknownType");
    assert_eq!(error.to_string(), "unknown type 'i32'");
    assert!(error.get_tip().to_string().contains("int, float, string, bool, void"));
}

#[test]
fn test_unrecognised_token_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "$".to_string(),
        },
        position(0, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(ErrorTip::None.to_string(), "");
}

#[test]
fn test_semantic_error_display() {
    let error = SemanticError::new(
        SemanticErrorKind::UndefinedVariable {
            variable: "y".to_string(),
        },
        Some(4),
    );

    assert_eq!(error.to_string(), "undefined variable 'y'");
    assert_eq!(error.get_line(), Some(4));
    assert_eq!(error.get_error_name(), "UndefinedVariable");
}

#[test]
fn test_immutable_assignment_hint() {
    let error = SemanticError::new(
        SemanticErrorKind::ImmutableAssignment {
            variable: "count".to_string(),
            type_: Type::Int,
        },
        Some(2),
    );

    assert!(error.to_string().ends_with("hint: declare it as 'mut count: int = ...'"));
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_argument_count_message() {
    let error = SemanticError::new(
        SemanticErrorKind::ArgumentCountMismatch {
            function: "add".to_string(),
            expected: 2,
            received: 3,
        },
        None,
    );

    assert_eq!(error.to_string(), "'add' expects 2 argument(s), got 3");
    assert_eq!(error.get_line(), None);
}

#[test]
fn test_argument_position_is_one_based_in_message() {
    let error = SemanticError::new(
        SemanticErrorKind::ArgumentTypeMismatch {
            function: "f".to_string(),
            position: 1,
            expected: Type::String,
            received: Type::Bool,
        },
        Some(1),
    );

    assert_eq!(error.to_string(), "argument 1 of 'f': expected 'string', got 'bool'");
}

#[test]
fn test_compile_error_conversions() {
    let syntax: CompileError = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        position(0, 5),
    )
    .into();
    assert_eq!(syntax.get_line(), Some(5));
    assert_eq!(syntax.get_error_name(), "NumberParseError");

    let semantic: CompileError =
        SemanticError::new(SemanticErrorKind::ReturnOutsideFunction, None).into();
    assert_eq!(semantic.get_line(), None);
    assert_eq!(semantic.to_string(), "'return' used outside of a function");
}
