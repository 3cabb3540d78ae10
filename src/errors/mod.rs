//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while lexing and parsing:
//!
//! - Error structures with source position information
//! - Lexical error kinds carried by ILLEGAL tokens
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
