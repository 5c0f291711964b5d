//! Main compiler module.
//!
//! This module contains the core Compiler structure and drives code
//! generation from a typed program to C source text. It owns the output
//! buffer and the current indentation, and maps Chalk types to C types.

use tracing::debug;

use crate::{
    ast::types::Type,
    type_checker::typed_ast::{TypedProgram, TypedStmt},
};

use super::stmt::gen_statement;

/// Headers every generated file starts with.
pub const INCLUDES: [&str; 2] = ["#include <stdio.h>", "#include <string.h>"];

/// Spaces per indentation level.
const INDENT_WIDTH: usize = 4;

/// The structure holding the state of one code generation run.
///
/// Lines are collected as they are emitted and joined once generation is
/// done. A fresh instance is used per program.
#[derive(Debug, Default)]
pub struct Compiler {
    /// Emitted lines, already indented
    pub output: Vec<String>,
    /// Current block nesting depth
    pub indent_level: usize,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler::default()
    }

    /// Appends a line at the current indentation. Empty lines stay empty.
    pub fn emit(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if line.is_empty() {
            self.output.push(String::new());
        } else {
            let indent = " ".repeat(self.indent_level * INDENT_WIDTH);
            self.output.push(format!("{}{}", indent, line));
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Emits `header {`, the body one level deeper, and the closing `}`.
    pub fn emit_block(&mut self, header: impl AsRef<str>, body: &[TypedStmt]) {
        self.emit(format!("{} {{", header.as_ref()));
        self.emit_body(body);
        self.emit("}");
    }

    /// Emits statements one level deeper than the current indentation.
    pub fn emit_body(&mut self, body: &[TypedStmt]) {
        self.indent();
        for statement in body {
            gen_statement(self, statement);
        }
        self.dedent();
    }

    /// Consumes the compiler, returning the generated source.
    pub fn finish(self) -> String {
        self.output.join("\n")
    }
}

/// Converts a Chalk type into the C type used to declare it.
///
/// # Arguments
///
/// * `ty` - The Chalk type to convert
///
/// # Returns
///
/// The spelling of the equivalent C type
pub fn convert_type(ty: Type) -> &'static str {
    match ty {
        Type::Int => "int",
        Type::Float => "float",
        Type::String => "char*",
        // C89 has no bool; truth values are ints
        Type::Bool => "int",
        Type::Void => "void",
    }
}

/// Generates C source for a program that passed type checking.
///
/// Function definitions are emitted first, in source order, at file scope.
/// Every other top-level statement goes into a generated `int main()` that
/// returns 0; `main` is left out when there are no such statements.
///
/// # Arguments
///
/// * `program` - The typed program to lower
///
/// # Returns
///
/// The C source, lines joined with `\n` and no trailing newline
pub fn generate(program: &TypedProgram) -> String {
    let mut compiler = Compiler::new();

    for include in INCLUDES {
        compiler.emit(include);
    }
    compiler.emit("");

    let (functions, statements): (Vec<&TypedStmt>, Vec<&TypedStmt>) = program
        .statements
        .iter()
        .partition(|statement| matches!(statement, TypedStmt::FnDecl(_)));

    for function in functions.iter() {
        gen_statement(&mut compiler, function);
    }

    if !statements.is_empty() {
        compiler.emit("int main() {");
        compiler.indent();
        for statement in statements.iter() {
            gen_statement(&mut compiler, statement);
        }
        compiler.emit("return 0;");
        compiler.dedent();
        compiler.emit("}");
    }

    debug!(
        functions = functions.len(),
        statements = statements.len(),
        lines = compiler.output.len(),
        "generated C"
    );

    compiler.finish()
}
