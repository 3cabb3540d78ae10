use crate::{
    ast::{
        ast::Expr,
        expressions::{AtomExpr, CallExpr, IndexExpr, InfixExpr, PostfixExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    MK_ERROR,
};

use super::{
    lookups::{infix_binding_power, postfix_binding_power, prefix_binding_power, MIN_BINDING_POWER},
    parser::Parser,
};

/// Parses an expression whose operators all bind tighter than `min_bp`.
pub fn parse_expr(parser: &mut Parser, min_bp: u8) -> Result<Expr, Error> {
    parser.enter_nested()?;
    let expr = parse_operators(parser, min_bp);
    parser.leave_nested();

    expr
}

fn parse_operators(parser: &mut Parser, min_bp: u8) -> Result<Expr, Error> {
    // A parenthesised operand is never a callee, even when it is an identifier
    let is_grouped = parser.current_token_kind() == TokenKind::OpenParen;
    let mut left = parse_primary_expr(parser)?;

    loop {
        let token_kind = parser.current_token_kind();

        if let Some(left_bp) = postfix_operator_binding_power(parser) {
            if min_bp >= left_bp {
                break;
            }
            left = parse_postfix_expr(parser, left, is_grouped)?;
            continue;
        }

        let Some((left_bp, right_bp)) = infix_binding_power(token_kind) else {
            break;
        };
        if min_bp >= left_bp {
            break;
        }
        left = parse_infix_expr(parser, left, right_bp)?;
    }

    Ok(left)
}

/// Binding power of the current token used as a postfix operator.
///
/// `^` is only a postfix dereference when the token after it cannot start an
/// operand; otherwise it is exponentiation.
fn postfix_operator_binding_power(parser: &Parser) -> Option<u8> {
    let token_kind = parser.current_token_kind();
    let left_bp = postfix_binding_power(token_kind)?;

    if token_kind == TokenKind::Caret && starts_expression(parser.peek_token()) {
        return None;
    }

    Some(left_bp)
}

/// Whether an expression can begin with this token.
pub fn starts_expression(token: &Token) -> bool {
    token.is_atom()
        || token.kind == TokenKind::OpenParen
        || token.kind == TokenKind::Illegal
        || prefix_binding_power(token.kind).is_some()
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token().is_atom() {
        return Ok(Expr::Atom(AtomExpr {
            token: parser.advance(),
        }));
    }

    let token_kind = parser.current_token_kind();
    if token_kind == TokenKind::OpenParen {
        return parse_grouping_expr(parser);
    }

    if let Some(right_bp) = prefix_binding_power(token_kind) {
        return parse_prefix_expr(parser, right_bp);
    }

    Err(parser.unexpected("an expression"))
}

pub fn parse_prefix_expr(parser: &mut Parser, right_bp: u8) -> Result<Expr, Error> {
    let operator = parser.advance();
    let operand = parse_expr(parser, right_bp)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, right_bp: u8) -> Result<Expr, Error> {
    let operator = parser.advance();
    let right = parse_expr(parser, right_bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, MIN_BINDING_POWER)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses `(`/`[` after a bare identifier into a call or an indexing, and
/// `^` into a dereference.
pub fn parse_postfix_expr(
    parser: &mut Parser,
    left: Expr,
    is_grouped: bool,
) -> Result<Expr, Error> {
    let operator = parser.advance();

    if !matches!(operator.kind, TokenKind::OpenParen | TokenKind::OpenBracket) {
        return Ok(Expr::Postfix(PostfixExpr {
            operand: Box::new(left),
            operator,
        }));
    }

    let callee = match left.as_identifier() {
        Some(atom) if !is_grouped => atom.clone(),
        _ => {
            let found = match &left {
                Expr::Atom(_) if is_grouped => format!("({})", left),
                _ => left.to_string(),
            };
            return Err(MK_ERROR!(
                ErrorImpl::InvalidCallee {
                    operator: operator.value.clone(),
                    found,
                },
                operator
            ));
        }
    };

    if operator.kind == TokenKind::OpenParen {
        let arguments = parse_expr_list(parser, TokenKind::CloseParen, true)?;
        Ok(Expr::Call(CallExpr { callee, arguments }))
    } else {
        let indexes = parse_expr_list(parser, TokenKind::CloseBracket, false)?;
        Ok(Expr::Index(IndexExpr { callee, indexes }))
    }
}

/// Parses comma separated expressions up to and including `closing`.
pub fn parse_expr_list(
    parser: &mut Parser,
    closing: TokenKind,
    allow_empty: bool,
) -> Result<Vec<Expr>, Error> {
    let mut expressions = vec![];

    if allow_empty && parser.current_token_kind() == closing {
        parser.advance();
        return Ok(expressions);
    }

    loop {
        expressions.push(parse_expr(parser, MIN_BINDING_POWER)?);

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
            }
            kind if kind == closing => {
                parser.advance();
                return Ok(expressions);
            }
            _ => {
                return Err(parser.unexpected(&format!("`,` or {}", closing.describe())));
            }
        }
    }
}
