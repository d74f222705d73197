//! # scala-facts
//!
//! Build-fact extraction for Scala sources: the package a file declares,
//! the fully-qualified names it imports, and the top-level symbols it
//! exports. Extraction is purely syntactic; nothing is resolved or
//! type-checked.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → File discovery, loading, parallel extraction
//!   ↓
//! hir       → Fact extraction (package, imports, exported symbols)
//!   ↓
//! syntax    → Parsed files, syntax-error query
//!   ↓
//! parser    → tree-sitter front end, SyntaxNode, SyntaxKind, AST views
//!   ↓
//! base      → Primitives (Position, TextRange, constants)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use scala_facts::ScalaExtractor;
//!
//! let mut extractor = ScalaExtractor::new()?;
//! let (facts, diagnostics) = extractor.parse(
//!     "Foo.scala",
//!     "package a.b\nimport c.d.{E, F => G}\nobject Foo { def run() = () }\n",
//! )?;
//! assert_eq!(facts.package, "a.b");
//! assert_eq!(facts.imports, ["c.d.E", "c.d.F"]);
//! assert_eq!(facts.symbols, ["Foo", "Foo.run"]);
//! assert!(diagnostics.is_empty());
//! # Ok::<(), scala_facts::ExtractError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → project)
// ============================================================================

/// Foundation types: Position, TextRange, constants
pub mod base;

/// Parser: tree-sitter front end, node classification, AST views, diagnostics
pub mod parser;

/// Syntax: parsed files and their syntax errors
pub mod syntax;

/// High-level IR: fact extraction
pub mod hir;

/// Project management: file discovery and batch extraction
pub mod project;

// Re-export the extraction API
pub use hir::{ExtractError, ParseResult, ScalaExtractor, extract_facts};
pub use parser::errors::{Diagnostic, ErrorCode, Severity};

// Re-export foundation types
pub use base::{Position, TextRange, TextSize};
