//! Type checking and semantic analysis module.
//!
//! This module walks the parsed AST once and turns it into a typed AST while:
//!
//! - Resolving variable and function references through nested scopes
//! - Enforcing declaration before use and immutability of `let` bindings
//! - Checking declarations, assignments, returns and call arguments for
//!   matching types
//! - Checking operand types of negation, arithmetic and comparisons
//!
//! Analysis stops at the first violation and reports it as a `SemanticError`
//! carrying the line of the offending node.

pub mod environment;
pub mod type_checker;
pub mod typed_ast;
