//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level entry
//! points. The parser pulls tokens from a single [`Lexer`] and keeps two of
//! them in view (`current` and `peek`). Statements are dispatched through the
//! static statement table, expressions go through the binding-power driven
//! expression parser.
//!
//! Errors are collected per statement: a malformed statement is reported,
//! the rest of its line is skipped, and parsing resumes on the next line.

use std::mem;

use crate::{
    ast::ast::{Expr, ParsedProgram},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    MK_ERROR,
};

use super::{
    expr::parse_expr,
    lookups::{MAX_NESTING_DEPTH, MIN_BINDING_POWER},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// The token right after `current`
    peek: Token,
    /// Expressions currently being parsed, innermost included
    depth: usize,
}

impl Parser {
    /// Creates a new Parser over a lexer, priming both lookahead tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peeked = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peeked)
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) and advances if the current token matches, otherwise
    /// returns the given error or a default one naming the expected kind.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.unexpected(&expected_kind.describe())),
            }
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds the error for finding the current token where `expected` was
    /// wanted. ILLEGAL tokens report their lexical problem instead.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = &self.current;

        match token.error {
            Some(kind) => MK_ERROR!(
                ErrorImpl::IllegalToken {
                    kind,
                    found: token.value.clone(),
                },
                token
            ),
            None => MK_ERROR!(
                ErrorImpl::UnexpectedToken {
                    expected: String::from(expected),
                    found: token.describe(),
                },
                token
            ),
        }
    }

    /// Enters one more level of expression nesting.
    ///
    /// Fails at the current token once [`MAX_NESTING_DEPTH`] levels are open.
    /// Every successful call must be paired with [`Parser::leave_nested`].
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(MK_ERROR!(
                ErrorImpl::NestingTooDeep {
                    found: self.current.describe(),
                },
                self.current
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks that the current token closes a statement, without consuming it.
    pub fn expect_end_of_statement(&self) -> Result<(), Error> {
        if self.current.is_end_of_statement() {
            Ok(())
        } else {
            Err(self.unexpected(&TokenKind::EOL.describe()))
        }
    }

    /// Skips to the end of the current line (the EOL itself is kept).
    pub fn skip_remaining_line(&mut self) {
        while !self.current.is_end_of_statement() {
            self.advance();
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Parses every statement in the source.
    ///
    /// Always returns a complete program: statements that failed to parse are
    /// left out and reported in `errors`, in source order.
    pub fn parse_program(mut self) -> ParsedProgram {
        let mut program = ParsedProgram::new();

        while self.has_tokens() {
            if self.current.kind == TokenKind::EOL {
                self.advance();
                continue;
            }

            match parse_stmt(&mut self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    program.errors.push(error);
                    self.skip_remaining_line();
                }
            }
        }

        program
    }

    /// Parses a single expression that must span the rest of the line.
    pub fn parse_standalone_expression(&mut self) -> Result<Expr, Error> {
        let expr = parse_expr(self, MIN_BINDING_POWER)?;
        self.expect_end_of_statement()?;

        Ok(expr)
    }
}

/// Parses a source buffer into a program.
///
/// This is the main entry point for parsing.
pub fn parse(source: &str) -> ParsedProgram {
    Parser::new(Lexer::new(String::from(source))).parse_program()
}

/// Parses a source buffer holding one expression.
pub fn parse_expression(source: &str) -> Result<Expr, Error> {
    Parser::new(Lexer::new(String::from(source))).parse_standalone_expression()
}
