//! The tree provider interface.
//!
//! Extraction never talks to tree-sitter directly. It walks any tree whose
//! nodes implement [`SyntaxNode`]: a type tag, indexed and field-based child
//! access, and a byte range into the source. The production implementation
//! is `tree_sitter::Node`; unit tests drive the same rules with an in-memory
//! tree.

use std::ops::Range;

use super::syntax_kind::SyntaxKind;
use crate::base::Position;

/// A node of a concrete syntax tree.
pub trait SyntaxNode: Clone {
    /// The raw grammar tag of this node
    fn tag(&self) -> &str;

    /// Whether this node is a named grammar rule (as opposed to a token)
    fn is_named(&self) -> bool;

    /// Whether the parser inserted this node to recover from a missing token
    fn is_missing(&self) -> bool;

    /// Whether this node is, or contains, a syntax error of any kind.
    ///
    /// Also true for zero-width nodes the grammar inserted under an alias,
    /// which report neither [`is_missing`](Self::is_missing) nor
    /// [`is_error`](Self::is_error).
    fn has_error(&self) -> bool;

    fn child_count(&self) -> usize;
    fn child(&self, index: usize) -> Option<Self>;
    fn named_child_count(&self) -> usize;
    fn named_child(&self, index: usize) -> Option<Self>;

    /// The first child tagged with `field`
    fn child_by_field(&self, field: &str) -> Option<Self>;

    /// The field tag of the child at `index` (all children, not just named)
    fn field_name_for_child(&self, index: usize) -> Option<&str>;

    fn byte_range(&self) -> Range<usize>;

    /// Zero-based line/column of the first byte
    fn start_position(&self) -> Position;

    fn kind(&self) -> SyntaxKind {
        SyntaxKind::from_tag(self.tag())
    }

    fn is_error(&self) -> bool {
        self.kind() == SyntaxKind::ERROR
    }

    /// The source text covered by this node.
    ///
    /// A range that does not fall on character boundaries of `source`
    /// yields an empty string.
    fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.byte_range()).unwrap_or("")
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        (0..self.child_count()).filter_map(move |index| self.child(index))
    }

    fn named_children(&self) -> impl Iterator<Item = Self> {
        (0..self.named_child_count()).filter_map(move |index| self.named_child(index))
    }

    /// All children tagged with `field`, in source order
    fn children_by_field(&self, field: &str) -> Vec<Self> {
        (0..self.child_count())
            .filter(|&index| self.field_name_for_child(index) == Some(field))
            .filter_map(|index| self.child(index))
            .collect()
    }

    /// The first named child of the given kind
    fn find_named_child(&self, kind: SyntaxKind) -> Option<Self> {
        self.named_children().find(|child| child.kind() == kind)
    }
}

impl SyntaxNode for tree_sitter::Node<'_> {
    fn tag(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn is_named(&self) -> bool {
        tree_sitter::Node::is_named(self)
    }

    fn is_missing(&self) -> bool {
        tree_sitter::Node::is_missing(self)
    }

    fn is_error(&self) -> bool {
        tree_sitter::Node::is_error(self)
    }

    fn has_error(&self) -> bool {
        tree_sitter::Node::has_error(self)
    }

    fn child_count(&self) -> usize {
        tree_sitter::Node::child_count(self)
    }

    fn child(&self, index: usize) -> Option<Self> {
        tree_sitter::Node::child(self, index)
    }

    fn named_child_count(&self) -> usize {
        tree_sitter::Node::named_child_count(self)
    }

    fn named_child(&self, index: usize) -> Option<Self> {
        tree_sitter::Node::named_child(self, index)
    }

    fn child_by_field(&self, field: &str) -> Option<Self> {
        tree_sitter::Node::child_by_field_name(self, field)
    }

    fn field_name_for_child(&self, index: usize) -> Option<&str> {
        let index = u32::try_from(index).ok()?;
        tree_sitter::Node::field_name_for_child(self, index)
    }

    fn byte_range(&self) -> Range<usize> {
        tree_sitter::Node::byte_range(self)
    }

    fn start_position(&self) -> Position {
        tree_sitter::Node::start_position(self).into()
    }
}
