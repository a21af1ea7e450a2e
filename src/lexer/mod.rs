//! Lexical analysis module.
//!
//! This module contains the lexer that turns a lazy character stream
//! into tokens for the parser, one token per request. It handles:
//!
//! - Recognition of the `def` and `extern` keywords, identifiers and numbers
//! - Single-character symbols for everything else
//! - Comments and whitespace handling
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
