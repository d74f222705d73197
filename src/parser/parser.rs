//! tree-sitter parser handle for Scala.

use tree_sitter::{Language, LanguageError, Tree};

/// The Scala grammar as a tree-sitter [`Language`]
pub fn scala_language() -> Language {
    tree_sitter_scala::LANGUAGE.into()
}

/// A reusable tree-sitter parser configured for Scala.
///
/// tree-sitter parsers are not thread-safe; callers keep one per thread.
pub struct ScalaParser {
    parser: tree_sitter::Parser,
}

impl ScalaParser {
    /// Create a parser with the Scala grammar loaded.
    ///
    /// Fails only when the linked grammar was generated for an ABI version
    /// the tree-sitter runtime does not support.
    pub fn new() -> Result<Self, LanguageError> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&scala_language())?;
        Ok(Self { parser })
    }

    /// Parse a complete source text.
    ///
    /// Returns `None` only when tree-sitter gives up without producing a
    /// tree; syntax errors still yield a tree with `ERROR` nodes in it.
    pub fn parse(&mut self, source: &str) -> Option<Tree> {
        self.parser.parse(source, None)
    }
}

impl std::fmt::Debug for ScalaParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalaParser").finish_non_exhaustive()
    }
}
