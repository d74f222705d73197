//! HIR layer tests
//!
//! Fact extraction through the real tree-sitter Scala grammar:
//! - Package clauses
//! - Import resolution
//! - Exported symbols and visibility
//! - Diagnostics and fatal errors

pub mod tests_diagnostics;
pub mod tests_imports;
pub mod tests_package;
pub mod tests_symbols;
