use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenKind};

use super::ast::Expr;

// LITERALS AND SYMBOLS

/// Atom Expression
/// A leaf wrapping a single literal or identifier token.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomExpr {
    pub token: Token,
}

impl AtomExpr {
    pub fn is_identifier(&self) -> bool {
        self.token.kind == TokenKind::Identifier
    }
}

impl Display for AtomExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

// OPERATORS

/// Prefix Expression
/// A unary operator applied to the operand on its right, e.g. `-x`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.operator.kind == TokenKind::Not {
            write!(f, "({} {})", self.operator.value, self.operand)
        } else {
            write!(f, "({}{})", self.operator.value, self.operand)
        }
    }
}

/// Infix Expression
/// A binary operator between two operands, e.g. `a + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub operator: Token,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.value, self.right)
    }
}

/// Postfix Expression
/// A unary operator following its operand, e.g. the dereference in `p^`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpr {
    pub operand: Box<Expr>,
    pub operator: Token,
}

impl Display for PostfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operand, self.operator.value)
    }
}

// CALLS AND INDEXING

/// Call Expression
/// `callee(arguments...)`. The callee is always an identifier atom.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: AtomExpr,
    pub arguments: Vec<Expr>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.callee, join(&self.arguments))
    }
}

/// Index Expression
/// `callee[indexes...]`. The callee is always an identifier atom.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub callee: AtomExpr,
    pub indexes: Vec<Expr>,
}

impl Display for IndexExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.callee, join(&self.indexes))
    }
}

pub(crate) fn join(expressions: &[Expr]) -> String {
    expressions
        .iter()
        .map(|expression| expression.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
