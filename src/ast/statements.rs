use super::{ast::{Expr, Stmt}, types::Type};

/// `let name: type = value;` or `mut name: type = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub explicit_type: Type,
    pub assigned_value: Expr,
    pub is_mutable: bool,
    pub line: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub identifier: String,
    pub value: Expr,
    pub line: Option<u32>,
}

/// A missing `else` and an empty `else { }` are the same: an empty `else_body`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    pub else_body: Vec<Stmt>,
    pub line: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub line: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<(String, Type)>,
    pub return_type: Type,
    pub body: Vec<Stmt>,
    pub line: Option<u32>,
}

/// `value` is `None` for a bare `return;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub line: Option<u32>,
}

/// Prints one or more values as a single output line.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub values: Vec<Expr>,
    pub line: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub line: Option<u32>,
}
