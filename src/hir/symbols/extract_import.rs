//! Import declaration extraction.
//!
//! One declaration holds one or more comma-separated import expressions.
//! Each expression is a base path followed by at most one tail:
//!
//! - nothing → `base`
//! - wildcard (`_`, `*`, `given`) → `base._`
//! - selector list → `base.<name>` per entry, `base._` for a wildcard entry
//! - rename (`a => b`, `a as b`) → `base.<a>`; the alias is dropped

use tracing::trace;

use crate::base::constants::{QUALIFIED_SEPARATOR, WILDCARD_SEGMENT};
use crate::hir::ExtractError;
use crate::parser::{
    AstNode, ImportDeclaration, ImportPart, ImportSelectors, RenamedIdentifier, Selector,
    SyntaxNode,
};

use super::qualified::read_nested_path;

/// What follows the base path of one import expression
#[derive(Debug, Default)]
enum Tail {
    #[default]
    None,
    Wildcard,
    Names(Vec<String>),
}

/// An import expression while its parts are being read
#[derive(Debug, Default)]
struct PendingExpression {
    path: Vec<String>,
    tail: Tail,
    has_tail: bool,
}

impl PendingExpression {
    fn is_empty(&self) -> bool {
        self.path.is_empty() && !self.has_tail
    }

    fn set_tail<N: SyntaxNode>(
        &mut self,
        tail: Tail,
        node: &N,
        parent: &N,
        source: &str,
    ) -> Result<(), ExtractError> {
        if self.has_tail || self.path.is_empty() {
            return Err(ExtractError::unexpected_child(node, parent, source));
        }
        self.tail = tail;
        self.has_tail = true;
        Ok(())
    }

    fn push_segment<N: SyntaxNode>(
        &mut self,
        segment: String,
        node: &N,
        parent: &N,
        source: &str,
    ) -> Result<(), ExtractError> {
        if self.has_tail {
            return Err(ExtractError::unexpected_child(node, parent, source));
        }
        self.path.push(segment);
        Ok(())
    }

    fn finish(self, imports: &mut Vec<String>) {
        let base = self.path.join(QUALIFIED_SEPARATOR);
        match self.tail {
            Tail::None => imports.push(base),
            Tail::Wildcard => imports.push(qualify(&base, WILDCARD_SEGMENT)),
            Tail::Names(names) => {
                imports.extend(names.iter().map(|name| qualify(&base, name)));
            }
        }
    }
}

fn qualify(base: &str, name: &str) -> String {
    format!("{base}{QUALIFIED_SEPARATOR}{name}")
}

/// Resolve one import declaration into fully-qualified names.
pub(super) fn extract_import<N: SyntaxNode>(
    imports: &mut Vec<String>,
    import: &ImportDeclaration<N>,
    source: &str,
) -> Result<(), ExtractError> {
    let decl = import.syntax();
    let mut expr = PendingExpression::default();

    for part in import.parts() {
        match part {
            ImportPart::Separator => {
                close_expression(std::mem::take(&mut expr), imports, decl, source)?;
            }
            ImportPart::QualifiedPath(node) => {
                let path = read_nested_path(&node, source)?;
                if !expr.path.is_empty() {
                    return Err(ExtractError::unexpected_child(&node, decl, source));
                }
                expr.push_segment(path, &node, decl, source)?;
            }
            ImportPart::Segment(node) => {
                expr.push_segment(node.text(source).to_string(), &node, decl, source)?;
            }
            ImportPart::Selectors(selectors) => {
                let names = read_selectors(&selectors, source)?;
                expr.set_tail(Tail::Names(names), selectors.syntax(), decl, source)?;
            }
            ImportPart::Wildcard(node) => {
                expr.set_tail(Tail::Wildcard, &node, decl, source)?;
            }
            ImportPart::Rename(rename) => {
                let name = renamed_name(&rename, source)?;
                expr.set_tail(Tail::Names(vec![name]), rename.syntax(), decl, source)?;
            }
            ImportPart::Comment(_) => {}
            ImportPart::Other(node) => {
                return Err(ExtractError::unexpected_child(&node, decl, source));
            }
        }
    }

    close_expression(expr, imports, decl, source)
}

fn close_expression<N: SyntaxNode>(
    expr: PendingExpression,
    imports: &mut Vec<String>,
    decl: &N,
    source: &str,
) -> Result<(), ExtractError> {
    if expr.is_empty() {
        return Err(ExtractError::missing("path", decl, source));
    }
    trace!(path = ?expr.path, tail = ?expr.tail, "import expression");
    expr.finish(imports);
    Ok(())
}

/// The names an explicit `{...}` selector list brings into scope
fn read_selectors<N: SyntaxNode>(
    selectors: &ImportSelectors<N>,
    source: &str,
) -> Result<Vec<String>, ExtractError> {
    let mut names = Vec::new();
    for selector in selectors.selectors() {
        match selector {
            Selector::Name(node) => names.push(node.text(source).to_string()),
            Selector::Rename(rename) => names.push(renamed_name(&rename, source)?),
            Selector::Wildcard(_) => names.push(WILDCARD_SEGMENT.to_string()),
            Selector::Comment(_) => {}
            Selector::Other(node) => {
                return Err(ExtractError::unexpected_child(
                    &node,
                    selectors.syntax(),
                    source,
                ));
            }
        }
    }
    Ok(names)
}

fn renamed_name<N: SyntaxNode>(
    rename: &RenamedIdentifier<N>,
    source: &str,
) -> Result<String, ExtractError> {
    rename
        .name()
        .map(|name| name.text(source).to_string())
        .ok_or_else(|| ExtractError::missing("name", rename.syntax(), source))
}
