use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{
            BinaryExpr, BinaryOperator, BoolExpr, CallExpr, NumberExpr, NumberValue, PrefixExpr,
            PrefixOperator, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::unescape, tokens::TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while parser.binding_power(parser.current_token_kind()) > bp {
        let token_kind = parser.current_token_kind();
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() },
                    parser.get_position(),
                ))
            }
        };

        let token_bp = parser.binding_power(token_kind);
        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();
    let line = Some(token.line());

    match token.kind {
        TokenKind::Number => {
            // The surface form decides: `2.0` is a float, `2` an int
            let value = if token.value.contains('.') {
                token.value.parse().map(NumberValue::Float).ok()
            } else {
                token.value.parse().map(NumberValue::Int).ok()
            };

            match value {
                Some(value) => Ok(Expr::Number(NumberExpr { value, line })),
                None => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value.clone() },
                    token.span.start.clone(),
                )),
            }
        }
        TokenKind::Identifier => Ok(Expr::Symbol(SymbolExpr { value: token.value, line })),
        TokenKind::String => Ok(Expr::String(StringExpr { value: unescape(&token.value), line })),
        TokenKind::True => Ok(Expr::Bool(BoolExpr { value: true, line })),
        TokenKind::False => Ok(Expr::Bool(BoolExpr { value: false, line })),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value.clone() },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = BinaryOperator::from_token_kind(operator_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken { token: operator_token.value.clone() },
            operator_token.span.start.clone(),
        )
    })?;

    // Parsing the right side at the operator's own power keeps same-level chains left-associative
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        line: left.line(),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: PrefixOperator::Negate,
        right_expr: Box::new(rhs),
        line: Some(operator_token.line()),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_detailed(TokenKind::CloseParen, "expected ')' to close the group")?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let callee = match left {
        Expr::Symbol(symbol) => symbol,
        _ => return Err(parser.error_detailed("only named functions can be called")),
    };

    parser.advance();
    let arguments = parse_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        callee: callee.value,
        arguments,
        line: callee.line,
    }))
}

/// Parses a comma separated expression list up to and including the closing `)`.
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut args = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() != TokenKind::CloseParen {
            parser.expect_detailed(TokenKind::Comma, "expected ',' between arguments")?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(args)
}
