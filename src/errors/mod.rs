//! Semantic diagnostics produced by type checking.
//!
//! This module defines the diagnostics surface of the semantic passes.
//! It includes:
//!
//! - `Diagnostic`, pairing an error with an optional source position
//! - `SemanticError`, one variant per user-facing semantic error
//! - Message rendering through `Display`
//!
//! Diagnostics are reported-and-collected, never thrown: one run surfaces
//! every independent error it can find. Contract violations (malformed
//! trees handed to the passes) are panics instead, not diagnostics.

pub mod errors;
