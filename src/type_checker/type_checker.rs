use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{BinaryExpr, CallExpr, NumberValue, PrefixExpr},
        statements::{AssignStmt, FnDeclStmt, IfStmt, ReturnStmt, VarDeclStmt, WhileStmt},
        types::Type,
    },
    errors::errors::{SemanticError, SemanticErrorKind},
};

use super::{
    environment::{FuncSymbol, ScopeStack, Symbol, SymbolEntry},
    typed_ast::{TypedExpr, TypedExprKind, TypedFnDeclStmt, TypedProgram, TypedStmt},
};

/// State of one analysis run.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub scopes: ScopeStack,
    /// Function whose body is being walked, used to validate `return`.
    pub current_function: Option<FuncSymbol>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::default()
    }

    /// Runs `body` inside a fresh scope. The scope is popped on every exit
    /// path, errors included.
    pub fn with_scope<T>(
        &mut self,
        body: impl FnOnce(&mut TypeChecker) -> Result<T, SemanticError>,
    ) -> Result<T, SemanticError> {
        self.scopes.push_scope();
        let result = body(self);
        self.scopes.pop_scope();

        result
    }

    fn lookup_variable(&self, name: &str, line: Option<u32>) -> Result<Symbol, SemanticError> {
        match self.scopes.lookup(name) {
            Some(SymbolEntry::Variable(symbol)) => Ok(symbol.clone()),
            Some(SymbolEntry::Function(_)) => Err(SemanticError::new(
                SemanticErrorKind::NotAVariable { name: name.to_string() },
                line,
            )),
            None => Err(SemanticError::new(
                SemanticErrorKind::UndefinedVariable { variable: name.to_string() },
                line,
            )),
        }
    }

    fn lookup_function(&self, name: &str, line: Option<u32>) -> Result<FuncSymbol, SemanticError> {
        match self.scopes.lookup(name) {
            Some(SymbolEntry::Function(function)) => Ok(function.clone()),
            Some(SymbolEntry::Variable(_)) => Err(SemanticError::new(
                SemanticErrorKind::NotAFunction { name: name.to_string() },
                line,
            )),
            None => Err(SemanticError::new(
                SemanticErrorKind::UndefinedFunction { function: name.to_string() },
                line,
            )),
        }
    }
}

pub fn type_check_expr(
    type_checker: &mut TypeChecker,
    ast: &Expr,
) -> Result<TypedExpr, SemanticError> {
    match ast {
        Expr::Number(number) => {
            let ty = match number.value {
                NumberValue::Int(_) => Type::Int,
                NumberValue::Float(_) => Type::Float,
            };
            Ok(TypedExpr::new(TypedExprKind::Number(number.value), ty))
        }
        Expr::String(string) => Ok(TypedExpr::new(
            TypedExprKind::String(string.value.clone()),
            Type::String,
        )),
        Expr::Bool(boolean) => Ok(TypedExpr::new(TypedExprKind::Bool(boolean.value), Type::Bool)),
        Expr::Symbol(symbol) => {
            let variable = type_checker.lookup_variable(&symbol.value, symbol.line)?;
            Ok(TypedExpr::new(
                TypedExprKind::Symbol(symbol.value.clone()),
                variable.var_type,
            ))
        }
        Expr::Prefix(prefix) => type_check_prefix_expr(type_checker, prefix),
        Expr::Binary(binary) => type_check_binary_expr(type_checker, binary),
        Expr::Call(call) => type_check_call_expr(type_checker, call),
    }
}

fn type_check_prefix_expr(
    type_checker: &mut TypeChecker,
    prefix: &PrefixExpr,
) -> Result<TypedExpr, SemanticError> {
    let operand = type_check_expr(type_checker, &prefix.right_expr)?;

    if !operand.ty.is_numeric() {
        return Err(SemanticError::new(
            SemanticErrorKind::InvalidNegation { received: operand.ty },
            prefix.line,
        ));
    }

    let ty = operand.ty;
    Ok(TypedExpr::new(
        TypedExprKind::Prefix {
            operator: prefix.operator,
            operand: Box::new(operand),
        },
        ty,
    ))
}

fn type_check_binary_expr(
    type_checker: &mut TypeChecker,
    binary: &BinaryExpr,
) -> Result<TypedExpr, SemanticError> {
    let left = type_check_expr(type_checker, &binary.left)?;
    let right = type_check_expr(type_checker, &binary.right)?;

    // No promotion between int and float: operands must agree exactly
    let ty = if binary.operator.is_comparison() {
        if left.ty != right.ty {
            return Err(SemanticError::new(
                SemanticErrorKind::ComparisonTypeMismatch { left: left.ty, right: right.ty },
                binary.line,
            ));
        }
        Type::Bool
    } else {
        if left.ty != right.ty {
            return Err(SemanticError::new(
                SemanticErrorKind::ArithmeticTypeMismatch {
                    operator: binary.operator.symbol().to_string(),
                    left: left.ty,
                    right: right.ty,
                },
                binary.line,
            ));
        }
        left.ty
    };

    Ok(TypedExpr::new(
        TypedExprKind::Binary {
            left: Box::new(left),
            operator: binary.operator,
            right: Box::new(right),
        },
        ty,
    ))
}

fn type_check_call_expr(
    type_checker: &mut TypeChecker,
    call: &CallExpr,
) -> Result<TypedExpr, SemanticError> {
    let function = type_checker.lookup_function(&call.callee, call.line)?;

    if call.arguments.len() != function.parameters.len() {
        return Err(SemanticError::new(
            SemanticErrorKind::ArgumentCountMismatch {
                function: function.name.clone(),
                expected: function.parameters.len(),
                received: call.arguments.len(),
            },
            call.line,
        ));
    }

    let mut arguments = Vec::with_capacity(call.arguments.len());
    for (index, (argument, (_, expected))) in call
        .arguments
        .iter()
        .zip(function.parameters.iter())
        .enumerate()
    {
        let argument = type_check_expr(type_checker, argument)?;
        if argument.ty != *expected {
            return Err(SemanticError::new(
                SemanticErrorKind::ArgumentTypeMismatch {
                    function: function.name.clone(),
                    position: index + 1,
                    expected: *expected,
                    received: argument.ty,
                },
                call.line,
            ));
        }
        arguments.push(argument);
    }

    Ok(TypedExpr::new(
        TypedExprKind::Call {
            callee: call.callee.clone(),
            arguments,
        },
        function.return_type,
    ))
}

pub fn type_check_stmt(
    type_checker: &mut TypeChecker,
    ast: &Stmt,
) -> Result<TypedStmt, SemanticError> {
    match ast {
        Stmt::VarDecl(var_decl_stmt) => type_check_var_decl_stmt(type_checker, var_decl_stmt),
        Stmt::Assign(assign_stmt) => type_check_assign_stmt(type_checker, assign_stmt),
        Stmt::If(if_stmt) => type_check_if_stmt(type_checker, if_stmt),
        Stmt::While(while_stmt) => type_check_while_stmt(type_checker, while_stmt),
        Stmt::FnDecl(fn_decl_stmt) => Ok(TypedStmt::FnDecl(type_check_fn_decl_stmt(
            type_checker,
            fn_decl_stmt,
        )?)),
        Stmt::Return(return_stmt) => type_check_return_stmt(type_checker, return_stmt),
        Stmt::Print(print_stmt) => {
            let values = print_stmt
                .values
                .iter()
                .map(|value| type_check_expr(type_checker, value))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TypedStmt::Print(values))
        }
        Stmt::Expression(expression_stmt) => Ok(TypedStmt::Expression(type_check_expr(
            type_checker,
            &expression_stmt.expression,
        )?)),
    }
}

fn type_check_var_decl_stmt(
    type_checker: &mut TypeChecker,
    var_decl_stmt: &VarDeclStmt,
) -> Result<TypedStmt, SemanticError> {
    // The initializer is checked before the name is bound, so it can never see itself
    let value = type_check_expr(type_checker, &var_decl_stmt.assigned_value)?;

    if value.ty != var_decl_stmt.explicit_type {
        return Err(SemanticError::new(
            SemanticErrorKind::DeclarationTypeMismatch {
                variable: var_decl_stmt.identifier.clone(),
                expected: var_decl_stmt.explicit_type,
                received: value.ty,
            },
            var_decl_stmt.line,
        ));
    }

    type_checker.scopes.define(
        var_decl_stmt.identifier.clone(),
        SymbolEntry::Variable(Symbol {
            name: var_decl_stmt.identifier.clone(),
            var_type: var_decl_stmt.explicit_type,
            is_mutable: var_decl_stmt.is_mutable,
        }),
    );
    trace!(
        name = %var_decl_stmt.identifier,
        ty = %var_decl_stmt.explicit_type,
        mutable = var_decl_stmt.is_mutable,
        "declared variable"
    );

    Ok(TypedStmt::VarDecl {
        identifier: var_decl_stmt.identifier.clone(),
        var_type: var_decl_stmt.explicit_type,
        value,
        is_mutable: var_decl_stmt.is_mutable,
    })
}

fn type_check_assign_stmt(
    type_checker: &mut TypeChecker,
    assign_stmt: &AssignStmt,
) -> Result<TypedStmt, SemanticError> {
    let target = type_checker.lookup_variable(&assign_stmt.identifier, assign_stmt.line)?;

    if !target.is_mutable {
        return Err(SemanticError::new(
            SemanticErrorKind::ImmutableAssignment {
                variable: target.name,
                type_: target.var_type,
            },
            assign_stmt.line,
        ));
    }

    let value = type_check_expr(type_checker, &assign_stmt.value)?;
    if value.ty != target.var_type {
        return Err(SemanticError::new(
            SemanticErrorKind::AssignmentTypeMismatch {
                variable: target.name,
                expected: target.var_type,
                received: value.ty,
            },
            assign_stmt.line,
        ));
    }

    Ok(TypedStmt::Assign {
        identifier: assign_stmt.identifier.clone(),
        value,
    })
}

fn type_check_if_stmt(
    type_checker: &mut TypeChecker,
    if_stmt: &IfStmt,
) -> Result<TypedStmt, SemanticError> {
    // Any condition type is accepted, C treats it as truthiness
    let condition = type_check_expr(type_checker, &if_stmt.condition)?;

    let then_body = type_checker
        .with_scope(|type_checker| type_check_block(type_checker, &if_stmt.then_body))?;
    let else_body = type_checker
        .with_scope(|type_checker| type_check_block(type_checker, &if_stmt.else_body))?;

    Ok(TypedStmt::If {
        condition,
        then_body,
        else_body,
    })
}

fn type_check_while_stmt(
    type_checker: &mut TypeChecker,
    while_stmt: &WhileStmt,
) -> Result<TypedStmt, SemanticError> {
    let condition = type_check_expr(type_checker, &while_stmt.condition)?;
    let body = type_checker
        .with_scope(|type_checker| type_check_block(type_checker, &while_stmt.body))?;

    Ok(TypedStmt::While { condition, body })
}

fn type_check_fn_decl_stmt(
    type_checker: &mut TypeChecker,
    fn_decl_stmt: &FnDeclStmt,
) -> Result<TypedFnDeclStmt, SemanticError> {
    let function = FuncSymbol {
        name: fn_decl_stmt.identifier.clone(),
        parameters: fn_decl_stmt.parameters.clone(),
        return_type: fn_decl_stmt.return_type,
    };

    // Bound before the body is walked so the function can call itself
    type_checker.scopes.define(
        fn_decl_stmt.identifier.clone(),
        SymbolEntry::Function(function.clone()),
    );
    debug!(
        name = %fn_decl_stmt.identifier,
        parameters = fn_decl_stmt.parameters.len(),
        returns = %fn_decl_stmt.return_type,
        "registered function"
    );

    let enclosing_function = type_checker.current_function.replace(function);

    let body = type_checker.with_scope(|type_checker| {
        for (name, ty) in fn_decl_stmt.parameters.iter() {
            type_checker.scopes.define(
                name.clone(),
                SymbolEntry::Variable(Symbol {
                    name: name.clone(),
                    var_type: *ty,
                    is_mutable: false,
                }),
            );
        }

        type_check_block(type_checker, &fn_decl_stmt.body)
    });

    type_checker.current_function = enclosing_function;

    Ok(TypedFnDeclStmt {
        identifier: fn_decl_stmt.identifier.clone(),
        parameters: fn_decl_stmt.parameters.clone(),
        return_type: fn_decl_stmt.return_type,
        body: body?,
    })
}

fn type_check_return_stmt(
    type_checker: &mut TypeChecker,
    return_stmt: &ReturnStmt,
) -> Result<TypedStmt, SemanticError> {
    let function = match &type_checker.current_function {
        Some(function) => function.clone(),
        None => {
            return Err(SemanticError::new(
                SemanticErrorKind::ReturnOutsideFunction,
                return_stmt.line,
            ))
        }
    };

    match &return_stmt.value {
        Some(value) => {
            let value = type_check_expr(type_checker, value)?;
            if value.ty != function.return_type {
                return Err(SemanticError::new(
                    SemanticErrorKind::ReturnTypeMismatch {
                        function: function.name,
                        expected: function.return_type,
                        received: value.ty,
                    },
                    return_stmt.line,
                ));
            }

            Ok(TypedStmt::Return(Some(value)))
        }
        None => {
            if function.return_type != Type::Void {
                return Err(SemanticError::new(
                    SemanticErrorKind::MissingReturnValue {
                        function: function.name,
                        expected: function.return_type,
                    },
                    return_stmt.line,
                ));
            }

            Ok(TypedStmt::Return(None))
        }
    }
}

/// Checks a statement sequence in the current scope.
pub fn type_check_block(
    type_checker: &mut TypeChecker,
    body: &[Stmt],
) -> Result<Vec<TypedStmt>, SemanticError> {
    body.iter()
        .map(|stmt| type_check_stmt(type_checker, stmt))
        .collect()
}

/// Analyzes a whole program and returns it with every expression typed.
///
/// Analysis stops at the first violation; the error carries the line of the
/// offending node when it has one.
pub fn type_check(ast: &Program) -> Result<TypedProgram, SemanticError> {
    let mut type_checker = TypeChecker::new();

    let statements = type_check_block(&mut type_checker, &ast.statements).map_err(|error| {
        debug!(line = ?error.get_line(), %error, "type check failed");
        error
    })?;

    debug!(statements = statements.len(), "type check complete");
    Ok(TypedProgram { statements })
}

/// Validates a program without keeping the typed tree.
pub fn analyze(ast: &Program) -> Result<(), SemanticError> {
    type_check(ast).map(|_| ())
}
