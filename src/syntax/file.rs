//! Syntax file wrapper for parsed Scala sources.
//!
//! A [`SyntaxFile`] owns the source text together with the tree-sitter
//! tree built from it, so nodes can always be resolved back to text.

use crate::parser::errors::{Diagnostic, ErrorCode, text_range};
use crate::parser::{ScalaParser, SyntaxNode, Tree};

/// Longest source excerpt quoted in a syntax error message
const EXCERPT_LIMIT: usize = 40;

/// A parsed Scala file.
#[derive(Debug, Clone)]
pub struct SyntaxFile {
    source: String,
    tree: Tree,
}

impl SyntaxFile {
    /// Parse `source` with the given parser.
    ///
    /// Returns `None` when tree-sitter produced no tree at all.
    pub fn parse(parser: &mut ScalaParser, source: impl Into<String>) -> Option<Self> {
        let source = source.into();
        let tree = parser.parse(&source)?;
        Some(Self { source, tree })
    }

    /// The root node (`compilation_unit` for any file that parsed)
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

}

/// Report every `ERROR` and `MISSING` node under `root`.
///
/// An `ERROR` node is reported once; nothing inside it is reported again.
/// A node that carries an error but has no erroneous child is a token the
/// grammar inserted under an alias, and is reported as missing. Subtrees
/// without errors are skipped. Results are in pre-order, which is source
/// order.
pub fn collect_syntax_errors<N: SyntaxNode>(root: &N, source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if !node.has_error() {
            continue;
        }

        if node.is_missing() {
            diagnostics.push(missing_token(&node));
            continue;
        }

        if node.is_error() {
            diagnostics.push(Diagnostic::new(
                format!("unexpected syntax '{}'", excerpt(node.text(source))),
                text_range(node.byte_range()),
                node.start_position(),
                ErrorCode::E0101,
            ));
            continue;
        }

        let children: Vec<N> = node.children().collect();
        if !children.iter().any(|child| child.has_error()) {
            diagnostics.push(missing_token(&node));
            continue;
        }
        stack.extend(children.into_iter().rev());
    }

    diagnostics
}

fn missing_token<N: SyntaxNode>(node: &N) -> Diagnostic {
    Diagnostic::new(
        format!("missing '{}'", node.tag()),
        text_range(node.byte_range()),
        node.start_position(),
        ErrorCode::E0102,
    )
}

/// First line of `text`, cut at [`EXCERPT_LIMIT`] characters
pub(crate) fn excerpt(text: &str) -> String {
    let line = text.lines().next().unwrap_or("").trim();
    if line.chars().count() > EXCERPT_LIMIT {
        let cut: String = line.chars().take(EXCERPT_LIMIT).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}
