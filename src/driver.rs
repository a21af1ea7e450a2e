//! The read-dispatch loop.
//!
//! The driver looks at the current token, starts the matching parse routine
//! and reports each outcome with one status line. Diagnostics and the prompt go
//! to a separate channel so that status output stays line-for-line.

use std::io::{self, Write};

use crate::{
    ast::ast::Item,
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::{
        decl::{parse_definition, parse_extern, parse_top_level_expr},
        parser::Parser,
    },
};

pub const PROMPT: &str = "ready> ";

/// Totals for one run of the driver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub parsed: usize,
    pub failed: usize,
}

pub struct Driver<'a> {
    out: Box<dyn Write + 'a>,
    diagnostics: Box<dyn Write + 'a>,
    prompt: bool,
    dump_ast: bool,
    summary: Summary,
}

impl<'a> Driver<'a> {
    pub fn new(out: Box<dyn Write + 'a>, diagnostics: Box<dyn Write + 'a>) -> Self {
        Driver {
            out,
            diagnostics,
            prompt: false,
            dump_ast: false,
            summary: Summary::default(),
        }
    }

    /// Print `ready> ` on the diagnostic channel before each dispatch.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Print each successfully parsed tree after its status line.
    pub fn with_ast_dump(mut self, dump_ast: bool) -> Self {
        self.dump_ast = dump_ast;
        self
    }

    /// Parses `lexer` to the end of its input and returns the tally of
    /// constructs parsed by this call.
    pub fn run(&mut self, lexer: Lexer) -> io::Result<Summary> {
        self.summary = Summary::default();
        self.show_prompt()?;

        // Reading the first token may block, so it happens after the first prompt
        let mut parser = Parser::new(lexer);

        loop {
            self.show_prompt()?;

            match parser.current_token_kind() {
                TokenKind::EOF => break,
                TokenKind::Symbol(';') => {
                    parser.advance();
                }
                TokenKind::Def => {
                    let result = parse_definition(&mut parser).map(Item::Definition);
                    self.report(&mut parser, result, "definition")?;
                }
                TokenKind::Extern => {
                    let result = parse_extern(&mut parser).map(Item::Extern);
                    self.report(&mut parser, result, "extern")?;
                }
                _ => {
                    let result = parse_top_level_expr(&mut parser).map(Item::TopLevel);
                    self.report(&mut parser, result, "top level expression")?;
                }
            }
        }

        self.out.flush()?;
        self.diagnostics.flush()?;

        Ok(self.summary)
    }

    fn report(
        &mut self,
        parser: &mut Parser,
        result: Result<Item, Error>,
        construct: &str,
    ) -> io::Result<()> {
        match result {
            Ok(item) => {
                self.summary.parsed += 1;
                writeln!(self.out, "{}", status_line(&item))?;
                if self.dump_ast {
                    writeln!(self.out, "{}", item)?;
                }
            }
            Err(error) => {
                self.summary.failed += 1;
                writeln!(self.diagnostics, "{}", error.diagnostic())?;
                writeln!(self.out, "Error failed to parse {}", construct)?;
                // Skip one token and let the next dispatch try again
                parser.advance();
            }
        }

        Ok(())
    }

    fn show_prompt(&mut self) -> io::Result<()> {
        if self.prompt {
            write!(self.diagnostics, "{}", PROMPT)?;
            self.diagnostics.flush()?;
        }

        Ok(())
    }
}

pub fn status_line(item: &Item) -> &'static str {
    match item {
        Item::Definition(_) => "Parsed a function definition",
        Item::Extern(_) => "Parsed an extern",
        Item::TopLevel(_) => "Parsed a top level expression",
    }
}
