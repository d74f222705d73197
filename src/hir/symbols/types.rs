//! Public type definitions for fact extraction.

// ============================================================================
// PARSE RESULT
// ============================================================================

/// The build facts extracted from one Scala source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseResult {
    /// Caller-supplied file identifier, passed through untouched
    pub file: String,
    /// Dot-qualified package name; empty when the file declares none
    pub package: String,
    /// Fully-qualified imports in declaration order, duplicates kept
    pub imports: Vec<String>,
    /// Namespace-qualified exported symbols in pre-order
    pub symbols: Vec<String>,
    /// Reserved; never set by extraction
    pub has_main: bool,
}

impl ParseResult {
    /// An empty result for `file`
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    /// Check if the file declares a package
    pub fn has_package(&self) -> bool {
        !self.package.is_empty()
    }
}

impl std::fmt::Display for ParseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.file)?;
        if self.has_package() {
            writeln!(f, "  package {}", self.package)?;
        }
        for import in &self.imports {
            writeln!(f, "  import {import}")?;
        }
        for symbol in &self.symbols {
            writeln!(f, "  symbol {symbol}")?;
        }
        Ok(())
    }
}
