//! Qualified-name readers.
//!
//! Package names arrive as a flat `package_identifier`. Import paths in the
//! older grammar arrive as a left-recursive `stable_identifier` chain where
//! the innermost layer holds the first two segments:
//!
//! ```text
//! com.twitter.finagle.http
//!   stable_identifier
//!     stable_identifier
//!       stable_identifier(com, twitter)
//!       finagle
//!     http
//! ```

use crate::base::constants::QUALIFIED_SEPARATOR;
use crate::hir::ExtractError;
use crate::parser::{SyntaxKind, SyntaxNode};

/// Dot-join the identifier children of a `package_identifier`.
///
/// With `ignore_last` the final segment is left out.
pub(super) fn read_package_identifier<N: SyntaxNode>(
    node: &N,
    source: &str,
    ignore_last: bool,
) -> Result<String, ExtractError> {
    read_segments(node, source, ignore_last, SyntaxKind::PACKAGE_IDENTIFIER)
}

/// Dot-join the identifier children of one `stable_identifier` layer.
///
/// A nested `stable_identifier` child is skipped, not descended into;
/// [`read_nested_path`] walks the chain.
pub(super) fn read_stable_identifier<N: SyntaxNode>(
    node: &N,
    source: &str,
    ignore_last: bool,
) -> Result<String, ExtractError> {
    read_segments(node, source, ignore_last, SyntaxKind::STABLE_IDENTIFIER)
}

/// Rebuild the full dotted path from a nested `stable_identifier` chain.
///
/// Walks outermost to innermost, prepending each layer's own segments.
pub(super) fn read_nested_path<N: SyntaxNode>(
    outer: &N,
    source: &str,
) -> Result<String, ExtractError> {
    let mut layers = Vec::new();
    let mut layer = Some(outer.clone());

    while let Some(node) = layer {
        let own = read_stable_identifier(&node, source, false)?;
        if !own.is_empty() {
            layers.push(own);
        }
        layer = node.find_named_child(SyntaxKind::STABLE_IDENTIFIER);
    }

    layers.reverse();
    Ok(layers.join(QUALIFIED_SEPARATOR))
}

fn read_segments<N: SyntaxNode>(
    node: &N,
    source: &str,
    ignore_last: bool,
    expected: SyntaxKind,
) -> Result<String, ExtractError> {
    if node.kind() != expected {
        return Err(ExtractError::unexpected_node(expected, node, source));
    }

    let mut total = node.named_child_count();
    if ignore_last {
        total = total.saturating_sub(1);
    }

    let mut segments = Vec::with_capacity(total);
    for child in node.named_children().take(total) {
        match child.kind() {
            kind if kind.is_identifier() => segments.push(child.text(source)),
            SyntaxKind::STABLE_IDENTIFIER if expected == SyntaxKind::STABLE_IDENTIFIER => {}
            _ => return Err(ExtractError::unexpected_child(&child, node, source)),
        }
    }

    Ok(segments.join(QUALIFIED_SEPARATOR))
}
