//! Symbol table module.
//!
//! The symbol table is built by the parser before the semantic passes run;
//! both passes only read it. It provides:
//!
//! - Slot-indexed storage of symbols (`SymIndex` is the lookup key)
//! - The predefined `void`/`integer`/`real` name-type slots
//! - Tagged entries for variables, constants, functions, procedures and
//!   name-types
//! - The scope stack identifying the block currently being checked
//! - Generated temporary variables for later phases

pub mod symtab;
