use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

/// Maps a binary operator character to its precedence. Higher binds tighter.
pub type PrecedenceTable = HashMap<char, i32>;

/// Precedence reported for anything that is not a binary operator.
pub const NO_PRECEDENCE: i32 = -1;

lazy_static! {
    pub static ref DEFAULT_PRECEDENCE: PrecedenceTable = create_precedence_lookups();
}

pub fn create_precedence_lookups() -> PrecedenceTable {
    let mut table = HashMap::new();

    // Relational
    table.insert('<', 10);

    // Additive and multiplicative
    table.insert('+', 20);
    table.insert('-', 20);
    table.insert('*', 40);

    table
}

/// Looks up the precedence of a token, or [`NO_PRECEDENCE`] when the token
/// cannot act as a binary operator.
pub fn get_precedence(table: &PrecedenceTable, kind: &TokenKind) -> i32 {
    match kind {
        TokenKind::Symbol(c) if c.is_ascii() => table
            .get(c)
            .copied()
            .filter(|precedence| *precedence >= 0)
            .unwrap_or(NO_PRECEDENCE),
        _ => NO_PRECEDENCE,
    }
}
