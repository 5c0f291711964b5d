use super::{
    expressions::{BinaryExpr, BoolExpr, CallExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr},
    statements::{
        AssignStmt, ExpressionStmt, FnDeclStmt, IfStmt, PrintStmt, ReturnStmt, VarDeclStmt,
        WhileStmt,
    },
};

/// Node Trait
///
/// Shared position metadata of every AST entity. The line is absent only for
/// synthetic nodes and is used for diagnostics alone.
pub trait Node {
    fn line(&self) -> Option<u32>;
}

/// Statement
///
/// The closed set of statement kinds. Passes match on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Assign(AssignStmt),
    If(IfStmt),
    While(WhileStmt),
    FnDecl(FnDeclStmt),
    Return(ReturnStmt),
    Print(PrintStmt),
    Expression(ExpressionStmt),
}

impl Node for Stmt {
    fn line(&self) -> Option<u32> {
        match self {
            Stmt::VarDecl(stmt) => stmt.line,
            Stmt::Assign(stmt) => stmt.line,
            Stmt::If(stmt) => stmt.line,
            Stmt::While(stmt) => stmt.line,
            Stmt::FnDecl(stmt) => stmt.line,
            Stmt::Return(stmt) => stmt.line,
            Stmt::Print(stmt) => stmt.line,
            Stmt::Expression(stmt) => stmt.line,
        }
    }
}

/// Expression
///
/// The closed set of expression kinds; each produces a value and a type.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Bool(BoolExpr),
    Symbol(SymbolExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Node for Expr {
    fn line(&self) -> Option<u32> {
        match self {
            Expr::Number(expr) => expr.line,
            Expr::String(expr) => expr.line,
            Expr::Bool(expr) => expr.line,
            Expr::Symbol(expr) => expr.line,
            Expr::Prefix(expr) => expr.line,
            Expr::Binary(expr) => expr.line,
            Expr::Call(expr) => expr.line,
        }
    }
}

/// Program
///
/// The sole root: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }
}

impl Node for Program {
    fn line(&self) -> Option<u32> {
        None
    }
}
