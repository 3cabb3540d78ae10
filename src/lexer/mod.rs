//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts pseudocode source
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization with line/column tracking
//! - Recognition of keywords, identifiers, literals, and operators
//! - Multi-character operator disambiguation (`<-`, `<>`, `<=`, `>=`)
//! - Comments and whitespace handling
//! - Lexical errors, reported as ILLEGAL tokens

pub mod lexer;
pub mod tokens;
