//! Code generation module for the compiler.
//!
//! This module lowers the typed AST into C source text. It handles:
//!
//! - Hoisting function definitions to file scope
//! - Wrapping the remaining top-level statements in a generated `main`
//! - Mapping Chalk types to C types
//! - Choosing `printf` format specifiers from the resolved expression types

pub mod compiler;
pub mod expr;
pub mod stmt;
