use crate::type_checker::typed_ast::{TypedFnDeclStmt, TypedStmt};

use super::{
    compiler::{convert_type, Compiler},
    expr::{gen_expression, gen_print},
};

pub fn gen_statement(compiler: &mut Compiler, statement: &TypedStmt) {
    match statement {
        TypedStmt::VarDecl {
            identifier,
            var_type,
            value,
            is_mutable,
        } => {
            let qualifier = if *is_mutable { "" } else { "const " };
            compiler.emit(format!(
                "{}{} {} = {};",
                qualifier,
                convert_type(*var_type),
                identifier,
                gen_expression(value)
            ));
        }
        TypedStmt::Assign { identifier, value } => {
            compiler.emit(format!("{} = {};", identifier, gen_expression(value)));
        }
        TypedStmt::If {
            condition,
            then_body,
            else_body,
        } => {
            compiler.emit(format!("if ({}) {{", gen_expression(condition)));
            compiler.emit_body(then_body);
            if !else_body.is_empty() {
                compiler.emit("} else {");
                compiler.emit_body(else_body);
            }
            compiler.emit("}");
        }
        TypedStmt::While { condition, body } => {
            compiler.emit_block(format!("while ({})", gen_expression(condition)), body);
        }
        TypedStmt::FnDecl(fn_decl_stmt) => gen_function(compiler, fn_decl_stmt),
        TypedStmt::Return(value) => match value {
            Some(value) => compiler.emit(format!("return {};", gen_expression(value))),
            None => compiler.emit("return;"),
        },
        TypedStmt::Print(values) => compiler.emit(gen_print(values)),
        TypedStmt::Expression(expression) => {
            compiler.emit(format!("{};", gen_expression(expression)));
        }
    }
}

/// Emits a C function definition followed by a blank line.
pub fn gen_function(compiler: &mut Compiler, fn_decl_stmt: &TypedFnDeclStmt) {
    let parameters = fn_decl_stmt
        .parameters
        .iter()
        .map(|(name, ty)| format!("{} {}", convert_type(*ty), name))
        .collect::<Vec<String>>()
        .join(", ");

    let signature = format!(
        "{} {}({})",
        convert_type(fn_decl_stmt.return_type),
        fn_decl_stmt.identifier,
        parameters
    );

    compiler.emit_block(signature, &fn_decl_stmt.body);
    compiler.emit("");
}
