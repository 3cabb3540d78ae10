//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates an Error positioned at a token
//!
//! These macros reduce boilerplate in the lexer and parser.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$position` - Position of the token's first character
/// * `$is_literal` - Whether the token is a value literal
///
/// An optional fifth argument attaches a `LexErrorKind` (ILLEGAL tokens only).
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), position, true);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr, $is_literal:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
            is_literal: $is_literal,
            error: None,
        }
    };
    ($kind:expr, $value:expr, $position:expr, $is_literal:expr, $error:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
            is_literal: $is_literal,
            error: Some($error),
        }
    };
}

/// Creates an Error located at the given token.
///
/// # Example
///
/// ```ignore
/// return Err(MK_ERROR!(ErrorImpl::InvalidStatement { found: token.describe() }, token));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($error_impl:expr, $token:expr) => {
        Error::new($error_impl, $token.position)
    };
}
