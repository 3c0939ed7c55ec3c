//! AST (Abstract Syntax Tree) module.
//!
//! Contains all definitions related to the tree the semantic passes operate
//! on. The tree arrives from the parser with symbol references already
//! resolved; the type checker annotates it and may rewrite children in
//! place, the optimizer may replace whole subtrees with literals.
//!
//! Submodules:
//! - ast: Node enums, operator kinds and the attribute accessors
//! - expressions: Expression node structs and expression lists
//! - statements: Statement node structs, statement lists and elsif chains

pub mod ast;
pub mod expressions;
pub mod statements;
