//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token stream
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions with
//! static binding power tables and handles:
//!
//! - Statement parsing (DECLARE, CONSTANT, assignments, INPUT, OUTPUT)
//! - Expression parsing (prefix, infix and postfix operators, calls, indexing)
//! - Datatype parsing, including array dimensions
//! - Error collection and recovery at statement granularity

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
