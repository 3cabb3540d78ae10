use crate::{
    ast::{
        ast::Stmt,
        statements::{
            AssignmentArrayStmt, AssignmentStmt, ConstantStmt, DeclareArrayStmt, DeclareStmt,
            InputStmt, OutputStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_expr, parse_expr_list},
        lookups::{MIN_BINDING_POWER, STMT_LOOKUP},
    },
    MK_ERROR,
};

use super::{
    parser::Parser,
    types::{parse_array_type, parse_datatype},
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = STMT_LOOKUP.get(&parser.current_token_kind()) {
        return handler(parser);
    }

    let token = parser.current_token();
    if token.error.is_some() {
        return Err(parser.unexpected("a statement"));
    }

    Err(MK_ERROR!(
        ErrorImpl::InvalidStatement {
            found: token.describe(),
        },
        token
    ))
}

pub fn parse_declare_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Colon)?;

    if parser.current_token_kind() == TokenKind::Array {
        let (dimensions, datatype) = parse_array_type(parser)?;
        parser.expect_end_of_statement()?;

        return Ok(Stmt::DeclareArray(DeclareArrayStmt {
            identifier,
            dimensions,
            datatype,
        }));
    }

    let datatype = parse_datatype(parser)?;
    parser.expect_end_of_statement()?;

    Ok(Stmt::Declare(DeclareStmt {
        identifier,
        datatype,
    }))
}

pub fn parse_constant_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Equals)?;

    if !parser.current_token().is_literal {
        return Err(parser.unexpected("a literal value"));
    }
    let value = parser.advance();

    parser.expect_end_of_statement()?;

    Ok(Stmt::Constant(ConstantStmt { identifier, value }))
}

/// Parses `x <- value`, or `x[i, ...] <- value` when the identifier is
/// directly followed by `[`.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.peek_token().kind == TokenKind::OpenBracket {
        return parse_assignment_array_stmt(parser);
    }

    let identifier = parser.advance();
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, MIN_BINDING_POWER)?;
    parser.expect_end_of_statement()?;

    Ok(Stmt::Assignment(AssignmentStmt { identifier, value }))
}

fn parse_assignment_array_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier = parser.advance();
    parser.expect(TokenKind::OpenBracket)?;

    let indexes = parse_expr_list(parser, TokenKind::CloseBracket, false)?;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, MIN_BINDING_POWER)?;
    parser.expect_end_of_statement()?;

    Ok(Stmt::AssignmentArray(AssignmentArrayStmt {
        identifier,
        indexes,
        value,
    }))
}

pub fn parse_input_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect_end_of_statement()?;

    Ok(Stmt::Input(InputStmt { identifier }))
}

pub fn parse_output_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let mut values = vec![parse_expr(parser, MIN_BINDING_POWER)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        values.push(parse_expr(parser, MIN_BINDING_POWER)?);
    }

    parser.expect_end_of_statement()?;

    Ok(Stmt::Output(OutputStmt { values }))
}
