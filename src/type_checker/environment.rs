//! Symbol table for the type checker.
//!
//! Scopes are kept as a stack: index 0 is the global scope and the last entry
//! is the innermost one. Lookups walk from the innermost scope outwards, so
//! inner declarations shadow outer ones until their scope is popped.

use std::collections::HashMap;

use tracing::trace;

use crate::ast::types::Type;

/// A variable binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub var_type: Type,
    pub is_mutable: bool,
}

/// A function binding.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncSymbol {
    pub name: String,
    pub parameters: Vec<(String, Type)>,
    pub return_type: Type,
}

/// Variables and functions share one namespace per scope, so a lookup can
/// return either and the caller checks it got the kind it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolEntry {
    Variable(Symbol),
    Function(FuncSymbol),
}

/// A single lexical scope.
#[derive(Debug, Default)]
pub struct Environment {
    symbols: HashMap<String, SymbolEntry>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Inserts or overwrites a binding in this scope.
    pub fn define(&mut self, name: String, symbol: SymbolEntry) {
        self.symbols.insert(name, symbol);
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.symbols.get(name)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }
}

#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<Environment>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        ScopeStack::new()
    }
}

impl ScopeStack {
    /// Creates a stack holding only the global scope.
    pub fn new() -> Self {
        ScopeStack {
            scopes: vec![Environment::new()],
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Environment::new());
        trace!(depth = self.depth(), "pushed scope");
    }

    /// Discards the innermost scope. The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
        trace!(depth = self.depth(), "popped scope");
    }

    /// Binds `name` in the innermost scope; an existing binding of the same
    /// name in that scope is replaced.
    pub fn define(&mut self, name: String, symbol: SymbolEntry) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.define(name, symbol);
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Number of scopes on the stack, the global scope included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[cfg(test)]
    pub fn current(&self) -> &Environment {
        // The global scope is never popped, so the stack is never empty
        &self.scopes[self.scopes.len() - 1]
    }
}
