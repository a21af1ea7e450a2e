use std::fmt::Display;

use crate::Span;

use super::{
    declarations::{FunctionDecl, PrototypeDecl},
    expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
};

/// Expression Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ExprType {
    Number,
    Variable,
    Binary,
    Call,
}

/// Expression
///
/// Every expression node owns its children; dropping the root frees the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    /// Returns the type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::Variable(_) => ExprType::Variable,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Call(_) => ExprType::Call,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::Variable(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(expr) => write!(f, "{}", expr.value),
            Expr::Variable(expr) => write!(f, "{}", expr.name),
            Expr::Binary(expr) => write!(f, "({} {} {})", expr.operator, expr.left, expr.right),
            Expr::Call(expr) => {
                write!(f, "(call {}", expr.callee)?;
                for argument in &expr.arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<NumberExpr> for Expr {
    fn from(expr: NumberExpr) -> Self {
        Expr::Number(expr)
    }
}

impl From<VariableExpr> for Expr {
    fn from(expr: VariableExpr) -> Self {
        Expr::Variable(expr)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}

impl From<CallExpr> for Expr {
    fn from(expr: CallExpr) -> Self {
        Expr::Call(expr)
    }
}

/// Item
///
/// One top-level construct, the root handed back for each parse the driver starts.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// `def name(params) body`
    Definition(FunctionDecl),
    /// `extern name(params)`
    Extern(PrototypeDecl),
    /// A bare expression, wrapped in an anonymous function
    TopLevel(FunctionDecl),
}

impl Item {
    pub fn get_span(&self) -> &Span {
        match self {
            Item::Definition(function) | Item::TopLevel(function) => &function.span,
            Item::Extern(prototype) => &prototype.span,
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Definition(function) => write!(f, "(def {})", function),
            Item::Extern(prototype) => write!(f, "(extern {})", prototype),
            Item::TopLevel(function) => write!(f, "(top-level {})", function.body),
        }
    }
}
