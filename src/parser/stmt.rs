use crate::{
    ast::{
        ast::Stmt,
        statements::{
            AssignStmt, ExpressionStmt, FnDeclStmt, IfStmt, PrintStmt, ReturnStmt, VarDeclStmt,
            WhileStmt,
        },
        types::Type,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_arguments, parse_expr},
        lookups::BindingPower,
    },
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_kind() == TokenKind::Assignment
    {
        return parse_assign_stmt(parser);
    }

    let line = parser.current_line();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt { expression, line }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance();
    let is_mutable = start_token.kind == TokenKind::Mut;

    let identifier = parser
        .expect_detailed(TokenKind::Identifier, "expected identifier during variable declaration")?
        .value;

    parser.expect_detailed(TokenKind::Colon, "expected ':' and a type after the variable name")?;
    let explicit_type = parse_type(parser)?;

    parser.expect_detailed(TokenKind::Assignment, "expected '=' and an initial value")?;
    let assigned_value = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        explicit_type,
        assigned_value,
        is_mutable,
        line: Some(start_token.line()),
    }))
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assign(AssignStmt {
        identifier: target.value,
        value,
        line: Some(target.span.start.line),
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_body = parse_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        if parser.current_token_kind() == TokenKind::If {
            // `else if` nests the chained if as the only else statement
            vec![parse_if_stmt(parser)?]
        } else {
            parse_block(parser)?
        }
    } else {
        vec![]
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        line: Some(start.line()),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        line: Some(start.line()),
    }))
}

/// Parses `{ stmt* }` into its statements.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect_detailed(TokenKind::OpenCurly, "expected '{' to open a block")?;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.error_detailed("expected '}' to close the block"));
        }
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(statements)
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance();

    let identifier = parser
        .expect_detailed(TokenKind::Identifier, "expected a function name")?
        .value;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        let name = parser
            .expect_detailed(TokenKind::Identifier, "expected a parameter name")?
            .value;
        parser.expect_detailed(TokenKind::Colon, "expected ':' and a parameter type")?;
        let ty = parse_type(parser)?;
        parameters.push((name, ty));

        if parser.current_token_kind() != TokenKind::CloseParen {
            parser.expect_detailed(TokenKind::Comma, "expected ',' between parameters")?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        parse_type(parser)?
    } else {
        Type::Void
    };

    let body = parse_block(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        identifier,
        parameters,
        return_type,
        body,
        line: Some(start.line()),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        line: Some(start.line()),
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance();

    parser.expect_detailed(TokenKind::OpenParen, "expected '(' after print")?;
    if parser.current_token_kind() == TokenKind::CloseParen {
        return Err(parser.error_detailed("print expects at least one value"));
    }
    let values = parse_arguments(parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Print(PrintStmt {
        values,
        line: Some(start.line()),
    }))
}
