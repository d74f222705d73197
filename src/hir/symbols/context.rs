//! Extraction context: tracks the file, its source, and diagnostics.

use tracing::warn;

use crate::base::constants::QUALIFIED_SEPARATOR;
use crate::parser::SyntaxNode;
use crate::parser::errors::{Diagnostic, ErrorCode, Severity, text_range};

/// The qualifying prefix for symbols at one nesting level.
///
/// Empty at the file root; `Outer.` inside `object Outer`. Values are
/// never mutated: descending into a body creates a new namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Namespace(String);

impl Namespace {
    pub fn root() -> Self {
        Self::default()
    }

    /// `name` qualified by this namespace
    pub fn qualify(&self, name: &str) -> String {
        format!("{}{}", self.0, name)
    }

    /// The namespace for members of the already-qualified `symbol`
    pub fn enter(&self, symbol: &str) -> Self {
        Self(format!("{symbol}{QUALIFIED_SEPARATOR}"))
    }
}

/// Extraction state passed through all extraction functions.
pub(super) struct ExtractionContext<'a> {
    pub file: &'a str,
    pub source: &'a str,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(file: &'a str, source: &'a str) -> Self {
        Self {
            file,
            source,
            diagnostics: Vec::new(),
        }
    }

    pub fn text<N: SyntaxNode>(&self, node: &N) -> &'a str {
        node.text(self.source)
    }

    /// Record a declaration whose kind the collector does not know.
    pub fn unrecognized<N: SyntaxNode>(&mut self, node: &N) {
        let position = node.start_position();
        warn!(
            file = self.file,
            kind = node.tag(),
            %position,
            "unknown symbol type"
        );
        self.diagnostics.push(
            Diagnostic::builder(ErrorCode::E0301)
                .message(format!("unrecognized symbol kind '{}'", node.tag()))
                .range(text_range(node.byte_range()))
                .position(position)
                .severity(Severity::Warning)
                .hint("the declaration is left out of the exported symbols")
                .build(),
        );
    }
}
