//! Fatal extraction errors.

use thiserror::Error;

use crate::base::Position;
use crate::parser::{LanguageError, SyntaxKind, SyntaxNode};
use crate::syntax::file::excerpt;

/// A structural violation that aborts extraction of one file.
///
/// Every variant that points at a node carries its tag, its position and
/// an excerpt of its source text.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A node of a different kind where a specific shape was required.
    #[error("{position}: expected '{expected}' node, found '{found}': {text}")]
    UnexpectedNode {
        expected: &'static str,
        found: String,
        position: Position,
        text: String,
    },

    /// A child that has no meaning inside its parent.
    #[error("{position}: unexpected node '{kind}' within '{within}': {text}")]
    UnexpectedChild {
        kind: String,
        within: String,
        position: Position,
        text: String,
    },

    /// A required child or field is absent.
    #[error("{position}: '{kind}' node has no {field}: {text}")]
    Missing {
        field: &'static str,
        kind: String,
        position: Position,
        text: String,
    },

    /// More than one package clause in a single file.
    #[error("multiple package declarations found in {file}")]
    MultiplePackages { file: String },

    /// The linked Scala grammar could not be loaded.
    #[error("failed to load the Scala grammar: {0}")]
    Language(#[from] LanguageError),
}

impl ExtractError {
    /// `node` is not of the `expected` kind.
    pub fn unexpected_node<N: SyntaxNode>(expected: SyntaxKind, node: &N, source: &str) -> Self {
        Self::UnexpectedNode {
            expected: expected.as_str(),
            found: node.tag().to_string(),
            position: node.start_position(),
            text: excerpt(node.text(source)),
        }
    }

    /// `node` may not appear inside `parent`.
    pub fn unexpected_child<N: SyntaxNode>(node: &N, parent: &N, source: &str) -> Self {
        Self::UnexpectedChild {
            kind: node.tag().to_string(),
            within: parent.tag().to_string(),
            position: node.start_position(),
            text: excerpt(parent.text(source)),
        }
    }

    /// `node` lacks the required `field` (a field name or child kind).
    pub fn missing<N: SyntaxNode>(field: &'static str, node: &N, source: &str) -> Self {
        Self::Missing {
            field,
            kind: node.tag().to_string(),
            position: node.start_position(),
            text: excerpt(node.text(source)),
        }
    }

    pub fn multiple_packages(file: impl Into<String>) -> Self {
        Self::MultiplePackages { file: file.into() }
    }
}
