//! Parser session state and the batch entry point.
//!
//! The parser owns the lexer, the single current token and the precedence
//! table for its session, so independent parsers never share state.

use std::mem;

use crate::{
    ast::ast::Item,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    decl::{parse_definition, parse_extern, parse_top_level_expr},
    lookups::{get_precedence, PrecedenceTable, DEFAULT_PRECEDENCE},
};

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Source of further tokens
    lexer: Lexer<'a>,
    /// The token every parse routine inspects; replaced on each advance
    current: Token,
    /// Binary operator precedences, fixed for the lifetime of the session
    precedence_lookup: PrecedenceTable,
}

impl<'a> Parser<'a> {
    /// Creates a parser with the default operator precedences and reads the
    /// first token.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser::with_precedence(lexer, DEFAULT_PRECEDENCE.clone())
    }

    /// Creates a parser with a caller-supplied precedence table.
    pub fn with_precedence(mut lexer: Lexer<'a>, precedence_lookup: PrecedenceTable) -> Self {
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            precedence_lookup,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// Reads the next token and returns the one it replaced.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it is `symbol`, otherwise fails with the
    /// error built by `error` from the token that was found.
    pub fn expect_symbol(
        &mut self,
        symbol: char,
        error: impl FnOnce(String) -> ErrorImpl,
    ) -> Result<Token, Error> {
        if self.current_token_kind().is_symbol(symbol) {
            Ok(self.advance())
        } else {
            Err(self.error(error))
        }
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error: impl FnOnce(String) -> ErrorImpl) -> Error {
        Error::new(error(self.current_token_kind().to_string()), self.get_position())
    }

    /// Precedence of the current token as a binary operator, -1 if it is not one.
    pub fn token_precedence(&self) -> i32 {
        get_precedence(&self.precedence_lookup, self.current_token_kind())
    }

    /// Returns a reference to the precedence lookup table.
    pub fn get_precedence_lookup(&self) -> &PrecedenceTable {
        &self.precedence_lookup
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses the next top-level construct, skipping stray `;` separators.
    ///
    /// Returns `None` at the end of input. On failure nothing is skipped; the
    /// caller decides how to recover.
    pub fn next_item(&mut self) -> Option<Result<Item, Error>> {
        loop {
            match self.current_token_kind() {
                TokenKind::EOF => return None,
                TokenKind::Symbol(';') => {
                    self.advance();
                }
                TokenKind::Def => return Some(parse_definition(self).map(Item::Definition)),
                TokenKind::Extern => return Some(parse_extern(self).map(Item::Extern)),
                _ => return Some(parse_top_level_expr(self).map(Item::TopLevel)),
            }
        }
    }
}

/// Parses a whole source string into its top-level constructs.
///
/// After a failed construct exactly one token is skipped before parsing
/// resumes, so one mistake can produce several errors.
///
/// # Returns
///
/// One result per construct attempted, in input order.
pub fn parse(source: &str, file: Option<String>) -> Vec<Result<Item, Error>> {
    let mut parser = Parser::new(Lexer::new(source.chars(), file));
    let mut items = vec![];

    while let Some(item) = parser.next_item() {
        if item.is_err() {
            parser.advance();
        }
        items.push(item);
    }

    items
}
