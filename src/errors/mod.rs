//! Error types and error handling for the front end.
//!
//! This module defines the syntax errors the parser can produce. It includes:
//!
//! - Error structures with source position information
//! - One variant per violated expectation
//! - Error formatting for the `Error <message>` diagnostic line

pub mod errors;

#[cfg(test)]
mod tests;
