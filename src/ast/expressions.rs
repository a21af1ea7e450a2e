use crate::Span;

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// Variable Expression
/// Represents a reference to a named value.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation in the AST. The operator is always a
/// character that had a non-negative precedence when it was parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: char,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Call Expression
/// Represents a call of a named function with its arguments in order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}
