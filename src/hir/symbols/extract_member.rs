//! Declaration extraction: exported symbols, recursing into objects.

use tracing::trace;

use crate::hir::ExtractError;
use crate::parser::{Binding, Definition, Member, SyntaxNode};

use super::context::{ExtractionContext, Namespace};
use super::visibility::has_access_modifier;

/// Collect the exported symbols of one declaration in pre-order.
pub(super) fn extract_member<N: SyntaxNode>(
    symbols: &mut Vec<String>,
    ctx: &mut ExtractionContext<'_>,
    member: &Member<N>,
    namespace: &Namespace,
) -> Result<(), ExtractError> {
    if has_access_modifier(member) {
        trace!(kind = member.syntax().tag(), "access-restricted, pruned");
        return Ok(());
    }

    match member {
        Member::Definition(def) => extract_definition(symbols, ctx, def, namespace),
        Member::Binding(binding) => extract_binding(symbols, ctx, binding, namespace),
        Member::Comment(_) => Ok(()),
        // Already reported by the syntax-error query.
        Member::Error(_) => Ok(()),
        Member::Unrecognized(node) => {
            ctx.unrecognized(node);
            Ok(())
        }
    }
}

fn extract_definition<N: SyntaxNode>(
    symbols: &mut Vec<String>,
    ctx: &mut ExtractionContext<'_>,
    def: &Definition<N>,
    namespace: &Namespace,
) -> Result<(), ExtractError> {
    let name = def
        .name()
        .ok_or_else(|| ExtractError::missing("name", def.syntax(), ctx.source))?;
    let name = ctx.text(&name);
    if name.is_empty() {
        // Inserted by error recovery; reported as a syntax error instead.
        trace!(kind = def.syntax().tag(), "nameless declaration skipped");
        return Ok(());
    }

    let symbol = namespace.qualify(name);
    symbols.push(symbol.clone());

    if !def.kind().is_namespace() {
        return Ok(());
    }

    let Some(body) = def.body() else {
        return Ok(());
    };

    let inner = namespace.enter(&symbol);
    for child in body.named_children() {
        extract_member(symbols, ctx, &Member::classify(child), &inner)?;
    }
    Ok(())
}

fn extract_binding<N: SyntaxNode>(
    symbols: &mut Vec<String>,
    ctx: &mut ExtractionContext<'_>,
    binding: &Binding<N>,
    namespace: &Namespace,
) -> Result<(), ExtractError> {
    let pattern = binding
        .pattern()
        .ok_or_else(|| ExtractError::missing("pattern", binding.syntax(), ctx.source))?;

    // `val Array(a, b) = ...` binds through a pattern; not exported.
    if pattern.kind().is_destructuring_pattern() {
        return Ok(());
    }

    let name = ctx.text(&pattern);
    if name.is_empty() {
        trace!(kind = binding.syntax().tag(), "nameless binding skipped");
        return Ok(());
    }

    symbols.push(namespace.qualify(name));
    Ok(())
}
