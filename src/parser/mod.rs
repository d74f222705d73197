//! Scala parsing front end
//!
//! Parsing itself is delegated to tree-sitter with the Scala grammar. This
//! module owns everything between the engine and extraction:
//!
//! ```text
//! Source Text
//!     ↓
//! ScalaParser (tree-sitter) → Tree of tree_sitter::Node
//!     ↓
//! SyntaxNode trait → tag, children, fields, byte ranges
//!     ↓
//! SyntaxKind → closed classification of node tags
//!     ↓
//! AST layer → Typed views (Item, Member, ImportPart, Selector)
//!     ↓
//! HIR → Extracted facts
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
mod node;
mod syntax_kind;

#[cfg(test)]
pub(crate) mod test_tree;

pub use ast::*;
pub use node::SyntaxNode;
pub use parser::{ScalaParser, scala_language};
pub use syntax_kind::SyntaxKind;

/// Re-export tree-sitter types for convenience
pub use tree_sitter::{LanguageError, Tree};
