//! Export visibility.

use crate::parser::{Member, SyntaxKind, SyntaxNode};

/// Whether a declaration carries any access modifier.
///
/// `private`, `protected` and their qualified forms (`private[pkg]`) all
/// count as restricted. Constructor parameters are not inspected, so a
/// class whose primary constructor is private is still exported.
pub(super) fn has_access_modifier<N: SyntaxNode>(member: &Member<N>) -> bool {
    member
        .modifiers()
        .is_some_and(|modifiers| modifiers.find_named_child(SyntaxKind::ACCESS_MODIFIER).is_some())
}
