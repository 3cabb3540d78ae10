use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{ast::Expr, expressions::join};

/// `DECLARE <identifier> : <datatype>`
#[derive(Debug, Clone, PartialEq)]
pub struct DeclareStmt {
    pub identifier: Token,
    pub datatype: Token,
}

impl Display for DeclareStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DECLARE {} : {}", self.identifier.value, self.datatype.value)
    }
}

/// `DECLARE <identifier> : ARRAY[1:<size>, ...] OF <datatype>`
///
/// Only the upper bound of each dimension is stored; lower bounds are always 1.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclareArrayStmt {
    pub identifier: Token,
    pub dimensions: Vec<Expr>,
    pub datatype: Token,
}

impl Display for DeclareArrayStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dimensions = self
            .dimensions
            .iter()
            .map(|size| format!("1:{}", size))
            .collect::<Vec<String>>()
            .join(", ");

        write!(
            f,
            "DECLARE {} : ARRAY[{}] OF {}",
            self.identifier.value, dimensions, self.datatype.value
        )
    }
}

/// `CONSTANT <identifier> = <literal>`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantStmt {
    pub identifier: Token,
    pub value: Token,
}

impl Display for ConstantStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CONSTANT {} = {}", self.identifier.value, self.value.value)
    }
}

/// `<identifier> <- <expression>`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub identifier: Token,
    pub value: Expr,
}

impl Display for AssignmentStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <- {}", self.identifier.value, self.value)
    }
}

/// `<identifier>[<index>, ...] <- <expression>`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentArrayStmt {
    pub identifier: Token,
    pub indexes: Vec<Expr>,
    pub value: Expr,
}

impl Display for AssignmentArrayStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}] <- {}",
            self.identifier.value,
            join(&self.indexes),
            self.value
        )
    }
}

/// `INPUT <identifier>`
#[derive(Debug, Clone, PartialEq)]
pub struct InputStmt {
    pub identifier: Token,
}

impl Display for InputStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "INPUT {}", self.identifier.value)
    }
}

/// `OUTPUT <expression>, ...`
#[derive(Debug, Clone, PartialEq)]
pub struct OutputStmt {
    pub values: Vec<Expr>,
}

impl Display for OutputStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OUTPUT {}", join(&self.values))
    }
}
