//! In-memory syntax trees for unit tests.
//!
//! Trees are described bottom-up with [`node`], [`leaf`] and [`token`];
//! [`build`] lays the leaves out on a single line separated by spaces and
//! returns the root together with the generated source, so `text()` works
//! exactly as it does on a parsed file.

use std::ops::Range;
use std::rc::Rc;

use super::node::SyntaxNode;
use crate::base::Position;

#[derive(Debug)]
struct NodeData {
    tag: String,
    named: bool,
    missing: bool,
    has_error: bool,
    range: Range<usize>,
    children: Vec<(Option<&'static str>, TestNode)>,
}

/// A node of a test tree; cheap to clone.
#[derive(Debug, Clone)]
pub(crate) struct TestNode(Rc<NodeData>);

/// Description of a node before layout.
#[derive(Debug, Clone)]
pub(crate) struct Shape {
    tag: String,
    named: bool,
    missing: bool,
    recovered: bool,
    field: Option<&'static str>,
    text: Option<String>,
    children: Vec<Shape>,
}

impl Shape {
    /// Tag this shape with a field name in its parent
    pub(crate) fn field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }
}

/// A named interior node
pub(crate) fn node(tag: &str, children: Vec<Shape>) -> Shape {
    Shape {
        tag: tag.to_string(),
        named: true,
        missing: false,
        recovered: false,
        field: None,
        text: None,
        children,
    }
}

/// A named leaf with source text
pub(crate) fn leaf(tag: &str, text: &str) -> Shape {
    Shape {
        text: Some(text.to_string()),
        ..node(tag, Vec::new())
    }
}

/// An anonymous token; its tag is its text
pub(crate) fn token(text: &str) -> Shape {
    Shape {
        named: false,
        ..leaf(text, text)
    }
}

/// A zero-width node the parser inserted for a missing token
pub(crate) fn missing(tag: &str) -> Shape {
    Shape {
        missing: true,
        named: false,
        ..leaf(tag, "")
    }
}

/// A zero-width named node the grammar inserted through an alias.
///
/// Unlike [`missing`], it is not flagged as missing; only
/// [`SyntaxNode::has_error`] gives it away.
pub(crate) fn recovered(tag: &str) -> Shape {
    Shape {
        recovered: true,
        ..leaf(tag, "")
    }
}

pub(crate) fn ident(text: &str) -> Shape {
    leaf("identifier", text)
}

/// Lay out `root` and return it with the generated source text.
pub(crate) fn build(root: Shape) -> (TestNode, String) {
    let mut source = String::new();
    let node = layout(root, &mut source);
    (node, source)
}

fn layout(shape: Shape, source: &mut String) -> TestNode {
    let range = match &shape.text {
        Some(text) => {
            if !source.is_empty() && !text.is_empty() {
                source.push(' ');
            }
            let start = source.len();
            source.push_str(text);
            start..source.len()
        }
        None => source.len()..source.len(),
    };

    let children: Vec<_> = shape
        .children
        .into_iter()
        .map(|child| {
            let field = child.field;
            (field, layout(child, source))
        })
        .collect();

    let range = match (children.first(), children.last()) {
        (Some((_, first)), Some((_, last))) => first.0.range.start..last.0.range.end,
        _ => range,
    };

    let has_error = shape.missing
        || shape.recovered
        || shape.tag == "ERROR"
        || children.iter().any(|(_, child)| child.0.has_error);

    TestNode(Rc::new(NodeData {
        tag: shape.tag,
        named: shape.named,
        missing: shape.missing,
        has_error,
        range,
        children,
    }))
}

impl SyntaxNode for TestNode {
    fn tag(&self) -> &str {
        &self.0.tag
    }

    fn is_named(&self) -> bool {
        self.0.named
    }

    fn is_missing(&self) -> bool {
        self.0.missing
    }

    fn has_error(&self) -> bool {
        self.0.has_error
    }

    fn child_count(&self) -> usize {
        self.0.children.len()
    }

    fn child(&self, index: usize) -> Option<Self> {
        self.0.children.get(index).map(|(_, child)| child.clone())
    }

    fn named_child_count(&self) -> usize {
        self.0.children.iter().filter(|(_, c)| c.0.named).count()
    }

    fn named_child(&self, index: usize) -> Option<Self> {
        self.0
            .children
            .iter()
            .filter(|(_, c)| c.0.named)
            .nth(index)
            .map(|(_, child)| child.clone())
    }

    fn child_by_field(&self, field: &str) -> Option<Self> {
        self.0
            .children
            .iter()
            .find(|(name, _)| *name == Some(field))
            .map(|(_, child)| child.clone())
    }

    fn field_name_for_child(&self, index: usize) -> Option<&str> {
        self.0.children.get(index).and_then(|(name, _)| *name)
    }

    fn byte_range(&self) -> Range<usize> {
        self.0.range.clone()
    }

    fn start_position(&self) -> Position {
        // Test sources are laid out on a single line.
        Position::new(0, self.0.range.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_assigns_leaf_text() {
        let (root, source) = build(node(
            "package_clause",
            vec![
                token("package"),
                node("package_identifier", vec![ident("a"), token("."), ident("b")])
                    .field("name"),
            ],
        ));

        assert_eq!(source, "package a . b");
        assert_eq!(root.text(&source), "package a . b");
        assert_eq!(root.named_child_count(), 1);

        let name = root.child_by_field("name").unwrap();
        assert_eq!(name.text(&source), "a . b");
        assert_eq!(name.named_child(1).unwrap().text(&source), "b");
    }

    #[test]
    fn test_fields_on_repeated_children() {
        let (root, _) = build(node(
            "import_declaration",
            vec![
                token("import"),
                ident("a").field("path"),
                token("."),
                ident("b").field("path"),
            ],
        ));

        assert_eq!(root.children_by_field("path").len(), 2);
        assert_eq!(root.field_name_for_child(0), None);
        assert_eq!(root.field_name_for_child(3), Some("path"));
    }

    #[test]
    fn test_errors_propagate_to_ancestors() {
        let (root, _) = build(node(
            "compilation_unit",
            vec![
                node("object_definition", vec![token("object"), ident("A")]),
                node(
                    "function_definition",
                    vec![token("def"), recovered("identifier").field("name")],
                ),
            ],
        ));

        assert!(root.has_error());
        assert!(!root.child(0).unwrap().has_error());

        let name = root.child(1).unwrap().child_by_field("name").unwrap();
        assert!(name.has_error());
        assert!(!name.is_missing());
        assert!(name.byte_range().is_empty());
    }
}
