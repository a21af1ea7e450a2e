use std::{
    io::{self, Read},
    rc::Rc,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    /// The part of a `[0-9.]+` run that converts to a number; the rest is dropped.
    static ref NUMBER_PREFIX: Regex = Regex::new(r"^[0-9]*\.?[0-9]*").unwrap();
}

/// A single-pass lexer over a lazy character source.
///
/// The lexer keeps one character of lookahead between calls to
/// [`Lexer::next_token`]; once a character has been read it is never re-read.
pub struct Lexer<'a> {
    source: Box<dyn Iterator<Item = char> + 'a>,
    /// The lookahead character, `None` once the source is exhausted.
    last_char: Option<char>,
    /// Offset of `last_char` in the input.
    pos: u32,
    /// Number of characters pulled from `source` so far.
    read: u32,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: impl Iterator<Item = char> + 'a, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("stdin"))
        };

        Lexer {
            source: Box::new(source),
            // Starts as whitespace so the first call reads from the source
            last_char: Some(' '),
            pos: 0,
            read: 0,
            file: file_name,
        }
    }

    /// Lexer over any reader, pulling one byte at a time as tokens are requested.
    pub fn from_reader(reader: impl Read + 'a, file: Option<String>) -> Lexer<'a> {
        Lexer::new(reader_chars(reader), file)
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn advance(&mut self) {
        self.last_char = self.source.next();
        self.pos = self.read;
        if self.last_char.is_some() {
            self.read += 1;
        }
    }

    /// Reads characters until one complete token has been recognised.
    pub fn next_token(&mut self) -> Token {
        while self.last_char.is_some_and(is_space) {
            self.advance();
        }

        let start = self.pos;

        let c = match self.last_char {
            Some(c) => c,
            None => return MK_TOKEN!(TokenKind::EOF, MK_SPAN!(start, start, self.file)),
        };

        if c.is_ascii_alphabetic() {
            return self.identifier(start);
        }

        if c.is_ascii_digit() || c == '.' {
            return self.number(start);
        }

        if c == '#' {
            while self.last_char.is_some_and(|c| c != '\n' && c != '\r') {
                self.advance();
            }
            // Either the end of input or a fresh line
            return self.next_token();
        }

        self.advance();
        MK_TOKEN!(TokenKind::Symbol(c), MK_SPAN!(start, self.pos, self.file))
    }

    fn identifier(&mut self, start: u32) -> Token {
        let mut identifier = String::new();
        while let Some(c) = self.last_char.filter(char::is_ascii_alphanumeric) {
            identifier.push(c);
            self.advance();
        }

        let span = MK_SPAN!(start, self.pos, self.file);
        if let Some(kind) = RESERVED_LOOKUP.get(identifier.as_str()) {
            MK_TOKEN!(kind.clone(), span)
        } else {
            MK_TOKEN!(TokenKind::Identifier(identifier), span)
        }
    }

    fn number(&mut self, start: u32) -> Token {
        let mut digits = String::new();
        while let Some(c) = self.last_char.filter(|c| c.is_ascii_digit() || *c == '.') {
            digits.push(c);
            self.advance();
        }

        MK_TOKEN!(
            TokenKind::Number(parse_number_prefix(&digits)),
            MK_SPAN!(start, self.pos, self.file)
        )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, not including, the end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        match token.kind {
            TokenKind::EOF => None,
            _ => Some(token),
        }
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Converts the longest numeric prefix of `text`, ignoring whatever follows it.
///
/// `"12.3.234"` reads as `12.3`; a prefix with no digits at all reads as `0.0`.
pub fn parse_number_prefix(text: &str) -> f64 {
    NUMBER_PREFIX
        .find(text)
        .and_then(|prefix| prefix.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Lazily maps the bytes of a reader to characters. A read error ends the stream.
pub fn reader_chars<'a>(reader: impl Read + 'a) -> impl Iterator<Item = char> + 'a {
    reader.bytes().map_while(Result::ok).map(char::from)
}

/// Lexer over the process's standard input.
pub fn stdin_lexer() -> Lexer<'static> {
    Lexer::from_reader(io::stdin(), None)
}

/// Tokenizes a whole string, including the trailing EOF token.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source.chars(), file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_eof {
            return tokens;
        }
    }
}
