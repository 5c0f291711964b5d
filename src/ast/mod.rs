/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions (program root, statement and expression sums)
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
/// - types: The closed set of Chalk type tags
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
