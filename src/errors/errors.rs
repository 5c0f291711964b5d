use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::Type, Position};

/// An error raised while turning source text into an AST.
#[derive(Debug, Clone)]
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

    pub fn get_line(&self) -> u32 {
        self.position.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownType { .. } => "UnknownType",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnknownType { type_ } => ErrorTip::Suggestion(format!(
                "Unknown type `{}`, expected one of int, float, string, bool, void",
                type_
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unknown type '{type_}'")]
    UnknownType { type_: String },
}

/// The single error kind raised by semantic analysis.
///
/// `Display` renders the bare message; the line, when known, is kept apart so
/// callers can prefix or point at it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}")]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub line: Option<u32>,
}

impl SemanticError {
    pub fn new(kind: SemanticErrorKind, line: Option<u32>) -> Self {
        SemanticError { kind, line }
    }

    pub fn get_line(&self) -> Option<u32> {
        self.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            SemanticErrorKind::UndefinedVariable { .. } => "UndefinedVariable",
            SemanticErrorKind::UndefinedFunction { .. } => "UndefinedFunction",
            SemanticErrorKind::ImmutableAssignment { .. } => "ImmutableAssignment",
            SemanticErrorKind::DeclarationTypeMismatch { .. } => "DeclarationTypeMismatch",
            SemanticErrorKind::AssignmentTypeMismatch { .. } => "AssignmentTypeMismatch",
            SemanticErrorKind::ReturnOutsideFunction => "ReturnOutsideFunction",
            SemanticErrorKind::ReturnTypeMismatch { .. } => "ReturnTypeMismatch",
            SemanticErrorKind::MissingReturnValue { .. } => "MissingReturnValue",
            SemanticErrorKind::InvalidNegation { .. } => "InvalidNegation",
            SemanticErrorKind::ComparisonTypeMismatch { .. } => "ComparisonTypeMismatch",
            SemanticErrorKind::ArithmeticTypeMismatch { .. } => "ArithmeticTypeMismatch",
            SemanticErrorKind::NotAFunction { .. } => "NotAFunction",
            SemanticErrorKind::NotAVariable { .. } => "NotAVariable",
            SemanticErrorKind::ArgumentCountMismatch { .. } => "ArgumentCountMismatch",
            SemanticErrorKind::ArgumentTypeMismatch { .. } => "ArgumentTypeMismatch",
        }
    }

    /// The message of `ImmutableAssignment` carries its own hint, so it has no tip.
    pub fn get_tip(&self) -> ErrorTip {
        match &self.kind {
            SemanticErrorKind::ReturnOutsideFunction => ErrorTip::Suggestion(String::from(
                "move the 'return' into a function body",
            )),
            SemanticErrorKind::MissingReturnValue { function, expected } => {
                ErrorTip::Suggestion(format!(
                    "'{}' is declared to return '{}', write 'return <value>;'",
                    function, expected
                ))
            }
            SemanticErrorKind::ArgumentCountMismatch { function, expected, .. } => {
                ErrorTip::Suggestion(format!(
                    "'{}' takes {} argument(s)",
                    function, expected
                ))
            }
            _ => ErrorTip::None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticErrorKind {
    #[error("undefined variable '{variable}'")]
    UndefinedVariable { variable: String },
    #[error("undefined function '{function}'")]
    UndefinedFunction { function: String },
    #[error("cannot assign to immutable variable '{variable}'\nhint: declare it as 'mut {variable}: {type_} = ...'")]
    ImmutableAssignment { variable: String, type_: Type },
    #[error("type mismatch: '{variable}' is '{expected}' but got '{received}'")]
    DeclarationTypeMismatch {
        variable: String,
        expected: Type,
        received: Type,
    },
    #[error("type mismatch in assignment to '{variable}': expected '{expected}', got '{received}'")]
    AssignmentTypeMismatch {
        variable: String,
        expected: Type,
        received: Type,
    },
    #[error("'return' used outside of a function")]
    ReturnOutsideFunction,
    #[error("return type mismatch in '{function}': expected '{expected}', got '{received}'")]
    ReturnTypeMismatch {
        function: String,
        expected: Type,
        received: Type,
    },
    #[error("missing return value in '{function}': expected '{expected}'")]
    MissingReturnValue { function: String, expected: Type },
    #[error("unary '-' requires int or float, got '{received}'")]
    InvalidNegation { received: Type },
    #[error("cannot compare '{left}' and '{right}'")]
    ComparisonTypeMismatch { left: Type, right: Type },
    #[error("type mismatch: cannot apply '{operator}' to '{left}' and '{right}'")]
    ArithmeticTypeMismatch {
        operator: String,
        left: Type,
        right: Type,
    },
    #[error("'{name}' is a variable, not a function")]
    NotAFunction { name: String },
    #[error("'{name}' is a function, not a variable")]
    NotAVariable { name: String },
    #[error("'{function}' expects {expected} argument(s), got {received}")]
    ArgumentCountMismatch {
        function: String,
        expected: usize,
        received: usize,
    },
    #[error("argument {position} of '{function}': expected '{expected}', got '{received}'")]
    ArgumentTypeMismatch {
        function: String,
        position: usize,
        expected: Type,
        received: Type,
    },
}

/// Any failure of the source-to-C pipeline.
#[derive(Error, Debug, Clone)]
pub enum CompileError {
    #[error(transparent)]
    Syntax(#[from] Error),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl CompileError {
    pub fn get_line(&self) -> Option<u32> {
        match self {
            CompileError::Syntax(error) => Some(error.get_line()),
            CompileError::Semantic(error) => error.get_line(),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            CompileError::Syntax(error) => error.get_error_name(),
            CompileError::Semantic(error) => error.get_error_name(),
        }
    }
}
