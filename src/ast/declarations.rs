use std::fmt::Display;

use crate::Span;

use super::ast::Expr;

/// Prototype Declaration
/// The name and parameter names of a function. Duplicate parameter names
/// are not rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct PrototypeDecl {
    pub name: String,
    pub parameters: Vec<String>,
    pub span: Span,
}

impl PrototypeDecl {
    /// The nameless, parameterless prototype given to top-level expressions.
    pub fn anonymous(span: Span) -> Self {
        PrototypeDecl {
            name: String::new(),
            parameters: vec![],
            span,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

impl Display for PrototypeDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.parameters.join(" "))
    }
}

/// Function Declaration
/// A prototype together with the expression it evaluates.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub prototype: PrototypeDecl,
    pub body: Expr,
    pub span: Span,
}

impl FunctionDecl {
    /// Wraps a bare expression as an anonymous zero-argument function.
    pub fn top_level(body: Expr) -> Self {
        let span = body.get_span().clone();
        FunctionDecl {
            prototype: PrototypeDecl::anonymous(Span {
                start: span.start.clone(),
                end: span.start.clone(),
            }),
            body,
            span,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.prototype.is_anonymous()
    }
}

impl Display for FunctionDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prototype, self.body)
    }
}
