//! High-level IR (HIR): build facts extracted from the syntax tree.
//!
//! ## Key Types
//!
//! - [`ScalaExtractor`] - Parses a source string and extracts its facts
//! - [`extract_facts`] - The extraction walk over any [`SyntaxNode`] tree
//! - [`ParseResult`] - Package, imports and exported symbols of one file
//! - [`ExtractError`] - Fatal structural violation
//!
//! [`SyntaxNode`]: crate::parser::SyntaxNode
//!
//! ## Extraction Layers
//!
//! ```text
//! ScalaExtractor::parse(file, source)
//!     │
//!     ▼
//! SyntaxFile                ← tree-sitter parse
//!     │
//!     ▼
//! extract_facts(root)       ← dispatch per root node
//!     │
//!     ├── package clause    → qualified-name reader
//!     ├── import            → import resolver
//!     └── declaration       → visibility filter → symbol collector
//!     │
//!     ▼
//! collect_syntax_errors     ← ERROR / MISSING nodes
//! ```

mod error;
mod extractor;
mod symbols;

pub use error::ExtractError;
pub use extractor::ScalaExtractor;
pub use symbols::{ParseResult, extract_facts};
