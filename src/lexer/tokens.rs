use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map
    };
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    EOF,

    // Reserved
    Def,
    Extern,

    Identifier(String),
    Number(f64),

    /// Any character the lexer has no other use for, operators and punctuation included.
    Symbol(char),
}

impl TokenKind {
    pub fn is_symbol(&self, c: char) -> bool {
        matches!(self, TokenKind::Symbol(symbol) if *symbol == c)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "<eof>"),
            TokenKind::Def => write!(f, "def"),
            TokenKind::Extern => write!(f, "extern"),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::Number(value) => write!(f, "{}", value),
            TokenKind::Symbol(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}
