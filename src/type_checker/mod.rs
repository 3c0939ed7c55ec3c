//! Type checking and semantic analysis module.
//!
//! This module performs the type checking pass over the AST. Driven one
//! block body at a time against the symbol table, it:
//!
//! - Synthesizes a type for every expression node
//! - Inserts integer-to-real cast nodes where mixed arithmetic, division,
//!   assignment or parameter passing promotes a value
//! - Verifies conditions, indices and the operands of the integer-only
//!   operators
//! - Checks return statements against the enclosing function or procedure,
//!   and that every path through a function body returns
//! - Matches call arguments against the callee's formal parameters
//!
//! Violations become [`Diagnostic`](crate::errors::errors::Diagnostic)
//! values collected on the checker; the pass never stops at the first
//! error.

pub mod type_checker;
