use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// expression ::= primary binoprhs
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let lhs = parse_primary_expr(parser)?;
    parse_binary_rhs(parser, 0, lhs)
}

/// primary ::= identifierexpr | numberexpr | parenexpr
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier(_) => parse_identifier_expr(parser),
        TokenKind::Number(_) => parse_number_expr(parser),
        TokenKind::Symbol('(') => parse_grouping_expr(parser),
        _ => Err(parser.error(|token| ErrorImpl::UnknownToken { token })),
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let value = match parser.current_token_kind() {
        TokenKind::Number(value) => *value,
        _ => return Err(parser.error(|token| ErrorImpl::UnknownToken { token })),
    };
    let span = parser.advance().span;

    Ok(NumberExpr { value, span }.into())
}

/// identifierexpr ::= identifier | identifier '(' (expression (',' expression)*)? ')'
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = match parser.current_token_kind() {
        TokenKind::Identifier(name) => name.clone(),
        _ => return Err(parser.error(|token| ErrorImpl::UnknownToken { token })),
    };
    let start = parser.advance().span;

    if !parser.current_token_kind().is_symbol('(') {
        return Ok(VariableExpr { name, span: start }.into());
    }

    parser.advance();

    let mut arguments = vec![];
    if !parser.current_token_kind().is_symbol(')') {
        loop {
            arguments.push(parse_expr(parser)?);

            if parser.current_token_kind().is_symbol(')') {
                break;
            }
            parser.expect_symbol(',', |token| ErrorImpl::ExpectedArgumentSeparator { token })?;
        }
    }

    let end = parser.advance().span;

    Ok(CallExpr {
        callee: name,
        arguments,
        span: start.to(&end),
    }
    .into())
}

/// parenexpr ::= '(' expression ')'
///
/// The parentheses only group; they leave no node behind.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect_symbol('(', |token| ErrorImpl::UnknownToken { token })?;
    let expr = parse_expr(parser)?;
    parser.expect_symbol(')', |token| ErrorImpl::ExpectedCloseParen { token })?;

    Ok(expr)
}

/// binoprhs ::= (binop primary)*
///
/// Folds operators while their precedence is at least `min_precedence`. An
/// operand is handed to a recursive call only when the operator after it binds
/// strictly tighter, which keeps equal precedences left-associative.
pub fn parse_binary_rhs(
    parser: &mut Parser,
    min_precedence: i32,
    mut lhs: Expr,
) -> Result<Expr, Error> {
    loop {
        let precedence = parser.token_precedence();
        if precedence < min_precedence || precedence < 0 {
            return Ok(lhs);
        }

        let operator = match parser.current_token_kind() {
            TokenKind::Symbol(operator) => *operator,
            _ => return Ok(lhs),
        };
        parser.advance();

        let mut rhs = parse_primary_expr(parser)?;

        if precedence < parser.token_precedence() {
            rhs = parse_binary_rhs(parser, precedence + 1, rhs)?;
        }

        let span = lhs.get_span().to(rhs.get_span());
        lhs = BinaryExpr {
            operator,
            left: Box::new(lhs),
            right: Box::new(rhs),
            span,
        }
        .into();
    }
}
