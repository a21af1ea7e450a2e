use crate::{
    ast::declarations::{FunctionDecl, PrototypeDecl},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// prototype ::= identifier '(' identifier* ')'
pub fn parse_prototype(parser: &mut Parser) -> Result<PrototypeDecl, Error> {
    let name = match parser.current_token_kind() {
        TokenKind::Identifier(name) => name.clone(),
        _ => return Err(parser.error(|token| ErrorImpl::ExpectedFunctionName { token })),
    };
    let start = parser.advance().span;

    parser.expect_symbol('(', |token| ErrorImpl::ExpectedPrototypeOpenParen { token })?;

    let mut parameters = vec![];
    while let TokenKind::Identifier(parameter) = parser.current_token_kind() {
        parameters.push(parameter.clone());
        parser.advance();
    }

    let end = parser
        .expect_symbol(')', |token| ErrorImpl::ExpectedPrototypeCloseParen { token })?
        .span;

    Ok(PrototypeDecl {
        name,
        parameters,
        span: start.to(&end),
    })
}

/// definition ::= 'def' prototype expression
///
/// The caller has already seen the `def` keyword; it is consumed unchecked.
pub fn parse_definition(parser: &mut Parser) -> Result<FunctionDecl, Error> {
    let start = parser.advance().span;

    let prototype = parse_prototype(parser)?;
    let body = parse_expr(parser)?;

    Ok(FunctionDecl {
        span: start.to(body.get_span()),
        prototype,
        body,
    })
}

/// external ::= 'extern' prototype
pub fn parse_extern(parser: &mut Parser) -> Result<PrototypeDecl, Error> {
    let start = parser.advance().span;
    let prototype = parse_prototype(parser)?;

    Ok(PrototypeDecl {
        span: start.to(&prototype.span),
        ..prototype
    })
}

/// toplevelexpr ::= expression
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<FunctionDecl, Error> {
    let body = parse_expr(parser)?;
    Ok(FunctionDecl::top_level(body))
}
