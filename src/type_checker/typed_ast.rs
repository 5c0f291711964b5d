//! Typed AST produced by the type checker.
//!
//! It mirrors the parsed AST, but every expression carries the type resolved
//! for it under proper scoping. The code generator reads types from here
//! instead of inferring them again.

use crate::ast::{
    expressions::{BinaryOperator, NumberValue, PrefixOperator},
    types::Type,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypedProgram {
    pub statements: Vec<TypedStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedStmt {
    VarDecl {
        identifier: String,
        var_type: Type,
        value: TypedExpr,
        is_mutable: bool,
    },
    Assign {
        identifier: String,
        value: TypedExpr,
    },
    If {
        condition: TypedExpr,
        then_body: Vec<TypedStmt>,
        else_body: Vec<TypedStmt>,
    },
    While {
        condition: TypedExpr,
        body: Vec<TypedStmt>,
    },
    FnDecl(TypedFnDeclStmt),
    Return(Option<TypedExpr>),
    Print(Vec<TypedExpr>),
    Expression(TypedExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedFnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<(String, Type)>,
    pub return_type: Type,
    pub body: Vec<TypedStmt>,
}

/// An expression together with its resolved type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpr {
    pub kind: TypedExprKind,
    pub ty: Type,
}

impl TypedExpr {
    pub fn new(kind: TypedExprKind, ty: Type) -> Self {
        TypedExpr { kind, ty }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedExprKind {
    Number(NumberValue),
    String(Vec<u8>),
    Bool(bool),
    Symbol(String),
    Prefix {
        operator: PrefixOperator,
        operand: Box<TypedExpr>,
    },
    Binary {
        left: Box<TypedExpr>,
        operator: BinaryOperator,
        right: Box<TypedExpr>,
    },
    Call {
        callee: String,
        arguments: Vec<TypedExpr>,
    },
}
