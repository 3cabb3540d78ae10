//! Datatype parsing.
//!
//! This module handles the type part of a declaration:
//!
//! - Native types (`INTEGER`, `REAL`, ...) and user-defined type names
//! - Array types, `ARRAY[1:<size>, ...] OF <datatype>`, where every dimension
//!   starts at the literal `1` and the upper bound is any expression

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    MK_ERROR,
};

use super::{expr::parse_expr, lookups::MIN_BINDING_POWER, parser::Parser};

/// Parses a native type keyword or a user type identifier.
pub fn parse_datatype(parser: &mut Parser) -> Result<Token, Error> {
    let token = parser.current_token();
    let is_native_type = token.kind.is_native_type() && !token.is_literal;

    if is_native_type || token.kind == TokenKind::Identifier {
        return Ok(parser.advance());
    }

    Err(parser.unexpected("a datatype"))
}

/// Parses `ARRAY[1:<size>{, 1:<size>}] OF <datatype>`.
///
/// # Returns
///
/// The upper bound of each dimension, in order, and the element datatype.
pub fn parse_array_type(parser: &mut Parser) -> Result<(Vec<Expr>, Token), Error> {
    parser.expect(TokenKind::Array)?;
    parser.expect(TokenKind::OpenBracket)?;

    let mut dimensions = vec![];
    loop {
        parse_lower_bound(parser)?;
        parser.expect(TokenKind::Colon)?;
        dimensions.push(parse_expr(parser, MIN_BINDING_POWER)?);

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    let error = parser.unexpected("`,` or `]`");
    parser.expect_error(TokenKind::CloseBracket, Some(error))?;
    parser.expect(TokenKind::Of)?;

    let datatype = parse_datatype(parser)?;

    Ok((dimensions, datatype))
}

fn parse_lower_bound(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.current_token();

    if token.kind != TokenKind::Integer || !token.is_literal {
        return Err(parser.unexpected("lower bound 1"));
    }

    if token.value != "1" {
        return Err(MK_ERROR!(
            ErrorImpl::InvalidLowerBound {
                found: token.value.clone(),
            },
            token
        ));
    }

    parser.advance();
    Ok(())
}
