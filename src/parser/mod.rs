//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from the lexer one at a
//! time and builds the AST. Expressions are parsed by recursive descent for
//! primaries and precedence climbing for binary operator chains, and it handles:
//!
//! - Declarations (`def`, `extern`) and their prototypes
//! - Top-level expressions, wrapped as anonymous functions
//! - Calls, variables, numbers and parenthesised expressions
//!
//! Every routine returns a `Result`; a failure carries the violated expectation
//! and the position of the offending token, and no partial tree is returned.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
