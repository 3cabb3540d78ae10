//! Static lookup tables driving the parser.
//!
//! Statement handlers are looked up by the kind of the token that starts the
//! statement. Operators are looked up by kind to find their binding powers:
//! an operator keeps extending the expression on its left while the caller's
//! minimum binding power is lower than the operator's left binding power, and
//! then parses its right-hand side with its right binding power as the new
//! minimum. Equal left/right powers give left associativity; a left power
//! above the right power gives right associativity.
//!
//! All tables are built once and never mutated.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Minimum binding power of a whole expression.
pub const MIN_BINDING_POWER: u8 = 0;

/// Deepest expression nesting the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
/// Right binding power of prefix operators
pub type PrefixLookup = HashMap<TokenKind, u8>;
/// (left, right) binding powers of infix operators
pub type InfixLookup = HashMap<TokenKind, (u8, u8)>;
/// Left binding power of postfix operators
pub type PostfixLookup = HashMap<TokenKind, u8>;

lazy_static! {
    pub static ref STMT_LOOKUP: StmtLookup = {
        let mut map: StmtLookup = HashMap::new();
        map.insert(TokenKind::Declare, parse_declare_stmt);
        map.insert(TokenKind::Constant, parse_constant_stmt);
        map.insert(TokenKind::Identifier, parse_assignment_stmt);
        map.insert(TokenKind::Input, parse_input_stmt);
        map.insert(TokenKind::Output, parse_output_stmt);
        map
    };

    pub static ref PREFIX_LOOKUP: PrefixLookup = {
        let mut map = HashMap::new();
        // NOT takes a whole comparison: NOT a = b is NOT (a = b)
        map.insert(TokenKind::Not, 4);
        // Unary minus binds tighter than * but looser than ^: -2 ^ 2 is -(2 ^ 2)
        map.insert(TokenKind::Minus, 15);
        map
    };

    pub static ref INFIX_LOOKUP: InfixLookup = {
        let mut map = HashMap::new();

        // Logical
        map.insert(TokenKind::Or, (1, 1));
        map.insert(TokenKind::And, (3, 3));

        // Equality, chains to the left
        map.insert(TokenKind::Equals, (5, 5));
        map.insert(TokenKind::NotEquals, (5, 5));

        // Relational
        map.insert(TokenKind::Less, (7, 7));
        map.insert(TokenKind::LessEquals, (7, 7));
        map.insert(TokenKind::Greater, (7, 7));
        map.insert(TokenKind::GreaterEquals, (7, 7));

        // Concatenation
        map.insert(TokenKind::Ampersand, (9, 9));

        // Additive and multiplicative
        map.insert(TokenKind::Plus, (11, 11));
        map.insert(TokenKind::Minus, (11, 11));
        map.insert(TokenKind::Star, (13, 13));
        map.insert(TokenKind::Slash, (13, 13));
        map.insert(TokenKind::Div, (13, 13));
        map.insert(TokenKind::Mod, (13, 13));

        // Exponentiation, right associative
        map.insert(TokenKind::Caret, (18, 17));

        // Member, right associative
        map.insert(TokenKind::Dot, (22, 21));
        map
    };

    pub static ref POSTFIX_LOOKUP: PostfixLookup = {
        let mut map = HashMap::new();
        // Dereference, only where `^` cannot be exponentiation
        map.insert(TokenKind::Caret, 19);

        // Call and indexing
        map.insert(TokenKind::OpenParen, 23);
        map.insert(TokenKind::OpenBracket, 23);
        map
    };
}

pub fn prefix_binding_power(kind: TokenKind) -> Option<u8> {
    PREFIX_LOOKUP.get(&kind).copied()
}

pub fn infix_binding_power(kind: TokenKind) -> Option<(u8, u8)> {
    INFIX_LOOKUP.get(&kind).copied()
}

pub fn postfix_binding_power(kind: TokenKind) -> Option<u8> {
    POSTFIX_LOOKUP.get(&kind).copied()
}
