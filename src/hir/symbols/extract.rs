//! Extraction entry point and root-level dispatch.

use tracing::{debug, trace};

use crate::hir::ExtractError;
use crate::parser::errors::Diagnostic;
use crate::parser::{AstNode, CompilationUnit, Item, SyntaxKind, SyntaxNode};
use crate::syntax::collect_syntax_errors;

use super::context::{ExtractionContext, Namespace};
use super::extract_import::extract_import;
use super::extract_member::extract_member;
use super::qualified::read_package_identifier;
use super::types::ParseResult;

/// Extract the build facts of one file from its syntax tree.
///
/// `root` is the root node of the tree built from `source`; `file` is an
/// opaque identifier copied into the result. Diagnostics hold unrecognized
/// declarations first, then the syntax errors of the tree. They never
/// suppress the result; only structural violations fail.
pub fn extract_facts<N: SyntaxNode>(
    file: &str,
    root: &N,
    source: &str,
) -> Result<(ParseResult, Vec<Diagnostic>), ExtractError> {
    let mut result = ParseResult::new(file);
    let mut ctx = ExtractionContext::new(file, source);
    let mut package: Option<String> = None;

    let unit = CompilationUnit::from_root(root.clone());
    for item in unit.items() {
        trace!(kind = item.syntax().tag(), "root node");
        match item {
            Item::Package(clause) => {
                if package.is_some() {
                    return Err(ExtractError::multiple_packages(file));
                }
                let identifier = clause.identifier().ok_or_else(|| {
                    ExtractError::missing(
                        SyntaxKind::PACKAGE_IDENTIFIER.as_str(),
                        clause.syntax(),
                        source,
                    )
                })?;
                package = Some(read_package_identifier(&identifier, source, false)?);
            }
            Item::Import(import) => extract_import(&mut result.imports, &import, source)?,
            Item::Member(member) => {
                extract_member(&mut result.symbols, &mut ctx, &member, &Namespace::root())?
            }
        }
    }

    result.package = package.unwrap_or_default();

    let mut diagnostics = ctx.diagnostics;
    diagnostics.extend(collect_syntax_errors(root, source));

    debug!(
        file,
        package = %result.package,
        imports = result.imports.len(),
        symbols = result.symbols.len(),
        diagnostics = diagnostics.len(),
        "extracted facts"
    );

    Ok((result, diagnostics))
}
