//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the Chalk constructs including:
//! - Variable declarations and assignments
//! - Function declarations
//! - Expressions, precedence and associativity
//! - Control flow statements
//! - Print statements

use std::rc::Rc;

use super::parser::parse;
use crate::{
    ast::{
        ast::{Expr, Node, Program, Stmt},
        expressions::{BinaryOperator, NumberValue, PrefixOperator},
        types::Type,
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.ch".to_string()))?;
    parse(tokens, Rc::new("test.ch".to_string()))
}

fn single_expression(source: &str) -> Expr {
    let program = parse_source(source).unwrap();
    match program.statements.into_iter().next() {
        Some(Stmt::Expression(stmt)) => stmt.expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_variable_declaration() {
    let program = parse_source("let x: int = 42;").unwrap();

    match &program.statements[0] {
        Stmt::VarDecl(decl) => {
            assert_eq!(decl.identifier, "x");
            assert_eq!(decl.explicit_type, Type::Int);
            assert!(!decl.is_mutable);
            assert!(matches!(
                decl.assigned_value,
                Expr::Number(ref number) if number.value == NumberValue::Int(42)
            ));
            assert_eq!(decl.line, Some(1));
        }
        other => panic!("expected a declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_mutable_declaration() {
    let program = parse_source("mut y: float = 2.0;").unwrap();

    match &program.statements[0] {
        Stmt::VarDecl(decl) => {
            assert!(decl.is_mutable);
            assert_eq!(decl.explicit_type, Type::Float);
            assert!(matches!(
                decl.assigned_value,
                Expr::Number(ref number) if number.value == NumberValue::Float(2.0)
            ));
        }
        other => panic!("expected a declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_declaration_requires_type() {
    assert!(parse_source("let x = 42;").is_err());
}

#[test]
fn test_parse_unknown_type() {
    let error = parse_source("let x: i32 = 42;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnknownType");
}

#[test]
fn test_parse_assignment() {
    let program = parse_source("mut x: int = 1;\nx = x + 1;").unwrap();

    match &program.statements[1] {
        Stmt::Assign(assign) => {
            assert_eq!(assign.identifier, "x");
            assert_eq!(assign.line, Some(2));
            assert!(matches!(assign.value, Expr::Binary(_)));
        }
        other => panic!("expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_function_declaration() {
    let program = parse_source("fn add(a: int, b: int) -> int { return a + b; }").unwrap();

    match &program.statements[0] {
        Stmt::FnDecl(function) => {
            assert_eq!(function.identifier, "add");
            assert_eq!(
                function.parameters,
                vec![(String::from("a"), Type::Int), (String::from("b"), Type::Int)]
            );
            assert_eq!(function.return_type, Type::Int);
            assert_eq!(function.body.len(), 1);
            assert!(matches!(function.body[0], Stmt::Return(ref ret) if ret.value.is_some()));
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_parse_function_without_return_type_is_void() {
    let program = parse_source("fn greet() { print(\"hi\"); return; }").unwrap();

    match &program.statements[0] {
        Stmt::FnDecl(function) => {
            assert!(function.parameters.is_empty());
            assert_eq!(function.return_type, Type::Void);
            assert!(matches!(function.body[1], Stmt::Return(ref ret) if ret.value.is_none()));
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_parse_if_statement() {
    let program = parse_source("if x > 0 { print(\"positive\"); }").unwrap();

    match &program.statements[0] {
        Stmt::If(if_stmt) => {
            assert_eq!(if_stmt.then_body.len(), 1);
            assert!(if_stmt.else_body.is_empty());
        }
        other => panic!("expected an if, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_else_matches_missing_else() {
    let without_else = parse_source("if true { print(1); }").unwrap();
    let empty_else = parse_source("if true { print(1); } else { }").unwrap();

    assert_eq!(without_else, empty_else);
}

#[test]
fn test_parse_else_if_chain() {
    let program =
        parse_source("if x < 0 { print(1); } else if x > 0 { print(2); } else { print(3); }")
            .unwrap();

    match &program.statements[0] {
        Stmt::If(if_stmt) => {
            assert_eq!(if_stmt.else_body.len(), 1);
            match &if_stmt.else_body[0] {
                Stmt::If(nested) => assert_eq!(nested.else_body.len(), 1),
                other => panic!("expected a nested if, got {:?}", other),
            }
        }
        other => panic!("expected an if, got {:?}", other),
    }
}

#[test]
fn test_parse_while_loop() {
    let program = parse_source("while x < 10 { x = x + 1; }").unwrap();

    match &program.statements[0] {
        Stmt::While(while_stmt) => {
            assert_eq!(while_stmt.body.len(), 1);
            assert!(matches!(while_stmt.condition, Expr::Binary(ref binary) if binary.operator == BinaryOperator::Less));
        }
        other => panic!("expected a while, got {:?}", other),
    }
}

#[test]
fn test_parse_print_multiple_values() {
    let program = parse_source("print(\"x =\", x, 1.5);").unwrap();

    match &program.statements[0] {
        Stmt::Print(print) => assert_eq!(print.values.len(), 3),
        other => panic!("expected a print, got {:?}", other),
    }
}

#[test]
fn test_parse_print_requires_a_value() {
    assert!(parse_source("print();").is_err());
}

#[test]
fn test_parse_precedence() {
    // 5 + (3 * 2)
    match single_expression("5 + 3 * 2;") {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, BinaryOperator::Add);
            assert!(matches!(*binary.right, Expr::Binary(ref right) if right.operator == BinaryOperator::Multiply));
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_left_associative() {
    // (10 - 4) - 3
    match single_expression("10 - 4 - 3;") {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, BinaryOperator::Subtract);
            assert!(matches!(*binary.left, Expr::Binary(ref left) if left.operator == BinaryOperator::Subtract));
            assert!(matches!(*binary.right, Expr::Number(_)));
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_comparison_binds_loosest() {
    // (a + 1) < (b * 2)
    match single_expression("a + 1 < b * 2;") {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, BinaryOperator::Less);
            assert!(binary.operator.is_comparison());
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_grouping() {
    // (5 + 3) * 2
    match single_expression("(5 + 3) * 2;") {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, BinaryOperator::Multiply);
            assert!(matches!(*binary.left, Expr::Binary(_)));
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_negation_binds_tighter_than_binary() {
    // (-a) + b
    match single_expression("-a + b;") {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, BinaryOperator::Add);
            assert!(matches!(*binary.left, Expr::Prefix(ref prefix) if prefix.operator == PrefixOperator::Negate));
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_parse_function_call() {
    match single_expression("add(1, f(2), 3);") {
        Expr::Call(call) => {
            assert_eq!(call.callee, "add");
            assert_eq!(call.arguments.len(), 3);
            assert!(matches!(call.arguments[1], Expr::Call(_)));
        }
        other => panic!("expected a call, got {:?}", other),
    }
}

#[test]
fn test_parse_booleans() {
    assert!(matches!(single_expression("true;"), Expr::Bool(ref b) if b.value));
    assert!(matches!(single_expression("false;"), Expr::Bool(ref b) if !b.value));
}

#[test]
fn test_parse_lines() {
    let program = parse_source("let a: int = 1;\n\nprint(\n  a\n);").unwrap();

    assert_eq!(program.statements[0].line(), Some(1));
    assert_eq!(program.statements[1].line(), Some(3));
    match &program.statements[1] {
        Stmt::Print(print) => assert_eq!(print.values[0].line(), Some(4)),
        other => panic!("expected a print, got {:?}", other),
    }
}

#[test]
fn test_parse_missing_semicolon() {
    let error = parse_source("let a: int = 1\nprint(a);").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_parse_unclosed_block() {
    assert!(parse_source("fn f() { print(1);").is_err());
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("// nothing here\n").unwrap();
    assert!(program.statements.is_empty());
}
