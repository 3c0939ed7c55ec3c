//! Constant folding module.
//!
//! This module performs the optimization pass that follows type checking.
//! It walks each block body and replaces constant subexpressions with
//! literals:
//!
//! - Binary operations whose operands are literals or named constants are
//!   evaluated at compile time
//! - Casts of integer constants become real literals
//! - Everything else is left exactly as the checker produced it
//!
//! The pass reads the symbol table to resolve named constants but never
//! writes to it, and it has no failure mode of its own: an expression that
//! cannot be folded safely is simply kept.

pub mod optimizer;
