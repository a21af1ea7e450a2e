//! Unit tests for the AST node model.

use crate::Span;

use super::{
    ast::{Expr, ExprType, Item},
    declarations::{FunctionDecl, PrototypeDecl},
    expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
};

fn number(value: f64) -> Expr {
    NumberExpr {
        value,
        span: Span::null(),
    }
    .into()
}

fn variable(name: &str) -> Expr {
    VariableExpr {
        name: name.to_string(),
        span: Span::null(),
    }
    .into()
}

#[test]
fn test_expr_types() {
    let call: Expr = CallExpr {
        callee: "f".to_string(),
        arguments: vec![number(1.0)],
        span: Span::null(),
    }
    .into();
    let binary: Expr = BinaryExpr {
        operator: '+',
        left: Box::new(number(1.0)),
        right: Box::new(variable("x")),
        span: Span::null(),
    }
    .into();

    assert_eq!(number(1.0).get_expr_type(), ExprType::Number);
    assert_eq!(variable("x").get_expr_type(), ExprType::Variable);
    assert_eq!(binary.get_expr_type(), ExprType::Binary);
    assert_eq!(call.get_expr_type(), ExprType::Call);
}

#[test]
fn test_expr_display() {
    let expr: Expr = BinaryExpr {
        operator: '*',
        left: Box::new(number(2.5)),
        right: Box::new(
            CallExpr {
                callee: "g".to_string(),
                arguments: vec![variable("a"), number(3.0)],
                span: Span::null(),
            }
            .into(),
        ),
        span: Span::null(),
    }
    .into();

    assert_eq!(expr.to_string(), "(* 2.5 (call g a 3))");
}

#[test]
fn test_top_level_function() {
    let function = FunctionDecl::top_level(variable("x"));

    assert!(function.is_top_level());
    assert!(function.prototype.is_anonymous());
    assert!(function.prototype.parameters.is_empty());
    assert_eq!(Item::TopLevel(function).to_string(), "(top-level x)");
}

#[test]
fn test_item_display() {
    let prototype = PrototypeDecl {
        name: "add".to_string(),
        parameters: vec!["a".to_string(), "b".to_string()],
        span: Span::null(),
    };
    let definition = FunctionDecl {
        prototype: prototype.clone(),
        body: variable("a"),
        span: Span::null(),
    };

    assert!(!definition.is_top_level());
    assert_eq!(Item::Extern(prototype).to_string(), "(extern add (a b))");
    assert_eq!(Item::Definition(definition).to_string(), "(def add (a b) a)");
}
