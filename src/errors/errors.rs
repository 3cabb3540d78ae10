use std::fmt::Display;

use thiserror::Error;

use crate::{parser::lookups::MAX_NESTING_DEPTH, Position};

/// A diagnostic produced by the parser.
///
/// Pairs what went wrong with where it went wrong. Renders as
/// `line L, col C; expected X, got Y`.
#[derive(Debug, Clone, PartialEq)]
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

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Description of what the parser was looking for.
    pub fn expected(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => expected.clone(),
            ErrorImpl::InvalidStatement { .. } => String::from("a statement"),
            ErrorImpl::IllegalToken { kind, .. } => kind.expected().to_string(),
            ErrorImpl::InvalidCallee { operator, .. } => {
                format!("an identifier before `{}`", operator)
            }
            ErrorImpl::InvalidLowerBound { .. } => String::from("lower bound 1"),
            ErrorImpl::NestingTooDeep { .. } => {
                format!("at most {} nested expressions", MAX_NESTING_DEPTH)
            }
        }
    }

    /// The text of whatever was found instead.
    pub fn found(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. }
            | ErrorImpl::InvalidStatement { found }
            | ErrorImpl::IllegalToken { found, .. }
            | ErrorImpl::InvalidCallee { found, .. }
            | ErrorImpl::InvalidLowerBound { found }
            | ErrorImpl::NestingTooDeep { found } => found,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidStatement { .. } => "InvalidStatement",
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::InvalidCallee { .. } => "InvalidCallee",
            ErrorImpl::InvalidLowerBound { .. } => "InvalidLowerBound",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found `{}`", expected, found))
            }
            ErrorImpl::InvalidStatement { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a statement, expected DECLARE, CONSTANT, INPUT, OUTPUT or an assignment",
                found
            )),
            ErrorImpl::IllegalToken { kind, .. } => ErrorTip::Suggestion(kind.to_string()),
            ErrorImpl::InvalidCallee { operator, found } => ErrorTip::Suggestion(format!(
                "Only a plain identifier can be followed by `{}`, found `{}`",
                operator, found
            )),
            ErrorImpl::InvalidLowerBound { found } => ErrorTip::Suggestion(format!(
                "Array dimensions always start at 1, found `{}`",
                found
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(format!(
                "Expressions can nest at most {} levels deep, split this one up",
                MAX_NESTING_DEPTH
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; expected {}, got {}",
            self.position,
            self.expected(),
            self.found()
        )
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
    #[error("unexpected token: expected {expected}, got {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("invalid statement: {found:?}")]
    InvalidStatement { found: String },
    #[error("illegal token {found:?}: {kind}")]
    IllegalToken { kind: LexErrorKind, found: String },
    #[error("{found:?} cannot be followed by {operator:?}")]
    InvalidCallee { operator: String, found: String },
    #[error("array lower bound must be 1, got {found:?}")]
    InvalidLowerBound { found: String },
    #[error("expression nested too deeply at {found:?}")]
    NestingTooDeep { found: String },
}

/// Why the lexer produced an ILLEGAL token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    #[error("Double quotes must be in pairs and strings cannot stretch across multiple lines")]
    UnterminatedString,
    #[error("Single quotes must be in pairs and can only contain a single character")]
    MalformedChar,
    #[error("A number can contain at most one decimal point, followed by digits")]
    MalformedNumber,
    #[error("Character is not part of the language")]
    UnrecognisedCharacter,
}

impl LexErrorKind {
    pub fn expected(&self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "a closing double quote on the same line",
            LexErrorKind::MalformedChar => "a single character between single quotes",
            LexErrorKind::MalformedNumber => "a number with at most one decimal point",
            LexErrorKind::UnrecognisedCharacter => "a valid character",
        }
    }
}
