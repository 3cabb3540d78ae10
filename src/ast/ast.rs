use std::fmt::Display;

use crate::errors::errors::Error;

use super::{
    expressions::{AtomExpr, CallExpr, IndexExpr, InfixExpr, PostfixExpr, PrefixExpr},
    statements::{
        AssignmentArrayStmt, AssignmentStmt, ConstantStmt, DeclareArrayStmt, DeclareStmt,
        InputStmt, OutputStmt,
    },
};

/// Statements
///
/// One variant per statement form. Consumers match on it exhaustively, so a
/// new statement form has to be handled everywhere it is consumed.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declare(DeclareStmt),
    DeclareArray(DeclareArrayStmt),
    Constant(ConstantStmt),
    Assignment(AssignmentStmt),
    AssignmentArray(AssignmentArrayStmt),
    Input(InputStmt),
    Output(OutputStmt),
}

impl Stmt {
    /// Name of the statement form, as used in listings.
    pub fn name(&self) -> &'static str {
        match self {
            Stmt::Declare(_) => "DECLARE",
            Stmt::DeclareArray(_) => "DECLARE ARRAY",
            Stmt::Constant(_) => "CONSTANT",
            Stmt::Assignment(_) => "ASSIGNMENT",
            Stmt::AssignmentArray(_) => "ASSIGNMENT ARRAY",
            Stmt::Input(_) => "INPUT",
            Stmt::Output(_) => "OUTPUT",
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Declare(stmt) => Display::fmt(stmt, f),
            Stmt::DeclareArray(stmt) => Display::fmt(stmt, f),
            Stmt::Constant(stmt) => Display::fmt(stmt, f),
            Stmt::Assignment(stmt) => Display::fmt(stmt, f),
            Stmt::AssignmentArray(stmt) => Display::fmt(stmt, f),
            Stmt::Input(stmt) => Display::fmt(stmt, f),
            Stmt::Output(stmt) => Display::fmt(stmt, f),
        }
    }
}

/// Expressions
///
/// Every node owns its children; the tree is never shared.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Atom(AtomExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    Postfix(PostfixExpr),
    Call(CallExpr),
    Index(IndexExpr),
}

impl Expr {
    /// The atom, if this expression is a bare identifier.
    pub fn as_identifier(&self) -> Option<&AtomExpr> {
        match self {
            Expr::Atom(atom) if atom.is_identifier() => Some(atom),
            _ => None,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Atom(expr) => Display::fmt(expr, f),
            Expr::Prefix(expr) => Display::fmt(expr, f),
            Expr::Infix(expr) => Display::fmt(expr, f),
            Expr::Postfix(expr) => Display::fmt(expr, f),
            Expr::Call(expr) => Display::fmt(expr, f),
            Expr::Index(expr) => Display::fmt(expr, f),
        }
    }
}

/// The parser's output: statements and diagnostics, both in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedProgram {
    pub statements: Vec<Stmt>,
    pub errors: Vec<Error>,
}

impl ParsedProgram {
    pub fn new() -> Self {
        ParsedProgram::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Display for ParsedProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "[{}] {}", stmt.name(), stmt)?;
        }
        for error in &self.errors {
            writeln!(f, "[ParseError] {}", error)?;
        }
        Ok(())
    }
}
