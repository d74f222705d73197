//! Typed AST views over untyped syntax nodes.
//!
//! Each view wraps a [`SyntaxNode`] and exposes the children extraction
//! cares about. Views never fail: shapes they do not recognize surface as
//! an `Other`/`Unrecognized` variant carrying the node, so the caller
//! decides whether that is fatal.

use super::node::SyntaxNode;
use super::syntax_kind::SyntaxKind;

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode<N: SyntaxNode>: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: N) -> Option<Self>;
    fn syntax(&self) -> &N;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone)]
        pub struct $name<N>(N);

        impl<N: SyntaxNode> AstNode<N> for $name<N> {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: N) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &N {
                &self.0
            }
        }
    };
}

// ============================================================================
// Root
// ============================================================================

ast_node!(CompilationUnit, COMPILATION_UNIT);

impl<N: SyntaxNode> CompilationUnit<N> {
    /// Wrap a root node regardless of its tag.
    ///
    /// Recovery can leave an `ERROR` node at the root of a badly broken
    /// file; its named children are still walked.
    pub fn from_root(node: N) -> Self {
        Self(node)
    }

    pub fn items(&self) -> impl Iterator<Item = Item<N>> + '_ {
        self.0.named_children().map(Item::classify)
    }
}

/// A direct child of the compilation unit
#[derive(Debug, Clone)]
pub enum Item<N> {
    Package(PackageClause<N>),
    Import(ImportDeclaration<N>),
    Member(Member<N>),
}

impl<N: SyntaxNode> Item<N> {
    pub fn classify(node: N) -> Self {
        match node.kind() {
            SyntaxKind::PACKAGE_CLAUSE => Self::Package(PackageClause(node)),
            SyntaxKind::IMPORT_DECLARATION => Self::Import(ImportDeclaration(node)),
            _ => Self::Member(Member::classify(node)),
        }
    }

    pub fn syntax(&self) -> &N {
        match self {
            Self::Package(package) => package.syntax(),
            Self::Import(import) => import.syntax(),
            Self::Member(member) => member.syntax(),
        }
    }
}

// ============================================================================
// Package
// ============================================================================

ast_node!(PackageClause, PACKAGE_CLAUSE);

impl<N: SyntaxNode> PackageClause<N> {
    /// The `package_identifier` child holding the dotted name
    pub fn identifier(&self) -> Option<N> {
        self.0.find_named_child(SyntaxKind::PACKAGE_IDENTIFIER)
    }
}

// ============================================================================
// Imports
// ============================================================================

ast_node!(ImportDeclaration, IMPORT_DECLARATION);

impl<N: SyntaxNode> ImportDeclaration<N> {
    /// The children of the declaration that carry structure.
    ///
    /// The `import` keyword and `.` separators are dropped; `,` between
    /// import expressions is kept as [`ImportPart::Separator`].
    pub fn parts(&self) -> impl Iterator<Item = ImportPart<N>> + '_ {
        self.0.children().filter_map(ImportPart::classify)
    }
}

/// One structural piece of an import declaration
#[derive(Debug, Clone)]
pub enum ImportPart<N> {
    /// A nested `stable_identifier` chain holding the whole base path
    QualifiedPath(N),
    /// One segment of a flat path
    Segment(N),
    Selectors(ImportSelectors<N>),
    Wildcard(N),
    /// `import a.b as c` at the tail of an expression
    Rename(RenamedIdentifier<N>),
    /// `,` between two import expressions
    Separator,
    Comment(N),
    Other(N),
}

impl<N: SyntaxNode> ImportPart<N> {
    fn classify(node: N) -> Option<Self> {
        if !node.is_named() {
            return (node.tag() == ",").then_some(Self::Separator);
        }
        Some(match node.kind() {
            SyntaxKind::STABLE_IDENTIFIER => Self::QualifiedPath(node),
            kind if kind.is_identifier() => Self::Segment(node),
            SyntaxKind::IMPORT_SELECTORS => Self::Selectors(ImportSelectors(node)),
            SyntaxKind::IMPORT_WILDCARD => Self::Wildcard(node),
            SyntaxKind::RENAMED_IDENTIFIER => Self::Rename(RenamedIdentifier(node)),
            kind if kind.is_trivia() => Self::Comment(node),
            _ => Self::Other(node),
        })
    }
}

ast_node!(ImportSelectors, IMPORT_SELECTORS);

impl<N: SyntaxNode> ImportSelectors<N> {
    pub fn selectors(&self) -> impl Iterator<Item = Selector<N>> + '_ {
        self.0.named_children().map(Selector::classify)
    }
}

/// One entry of a `{...}` selector list
#[derive(Debug, Clone)]
pub enum Selector<N> {
    Name(N),
    Rename(RenamedIdentifier<N>),
    Wildcard(N),
    Comment(N),
    Other(N),
}

impl<N: SyntaxNode> Selector<N> {
    fn classify(node: N) -> Self {
        match node.kind() {
            kind if kind.is_identifier() => Self::Name(node),
            SyntaxKind::RENAMED_IDENTIFIER => Self::Rename(RenamedIdentifier(node)),
            SyntaxKind::IMPORT_WILDCARD => Self::Wildcard(node),
            kind if kind.is_trivia() => Self::Comment(node),
            _ => Self::Other(node),
        }
    }
}

ast_node!(RenamedIdentifier, RENAMED_IDENTIFIER);

impl<N: SyntaxNode> RenamedIdentifier<N> {
    /// The imported (original) name
    pub fn name(&self) -> Option<N> {
        self.0.child_by_field("name")
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// The kinds of named declarations that export a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Function,
    Type,
    Class,
    Trait,
    Object,
}

impl DefinitionKind {
    pub fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::FUNCTION_DEFINITION => Some(Self::Function),
            SyntaxKind::TYPE_DEFINITION => Some(Self::Type),
            SyntaxKind::CLASS_DEFINITION => Some(Self::Class),
            SyntaxKind::TRAIT_DEFINITION => Some(Self::Trait),
            SyntaxKind::OBJECT_DEFINITION => Some(Self::Object),
            _ => None,
        }
    }

    /// Whether symbols declared in the body are exported under this name
    pub fn is_namespace(self) -> bool {
        matches!(self, Self::Object)
    }
}

/// A declaration-position node, classified
#[derive(Debug, Clone)]
pub enum Member<N> {
    Definition(Definition<N>),
    Binding(Binding<N>),
    Comment(N),
    /// A parser recovery node
    Error(N),
    /// Any other tag; the node keeps its raw tag
    Unrecognized(N),
}

impl<N: SyntaxNode> Member<N> {
    pub fn classify(node: N) -> Self {
        let kind = node.kind();
        if let Some(def_kind) = DefinitionKind::from_kind(kind) {
            return Self::Definition(Definition {
                node,
                kind: def_kind,
            });
        }
        match kind {
            SyntaxKind::VAL_DEFINITION | SyntaxKind::VAR_DEFINITION => Self::Binding(Binding(node)),
            kind if kind.is_trivia() => Self::Comment(node),
            SyntaxKind::ERROR => Self::Error(node),
            _ => Self::Unrecognized(node),
        }
    }

    pub fn syntax(&self) -> &N {
        match self {
            Self::Definition(def) => &def.node,
            Self::Binding(binding) => &binding.0,
            Self::Comment(node) | Self::Error(node) | Self::Unrecognized(node) => node,
        }
    }

    /// The `modifiers` child, for member kinds that can carry one
    pub fn modifiers(&self) -> Option<N> {
        match self {
            Self::Definition(_) | Self::Binding(_) => {
                self.syntax().find_named_child(SyntaxKind::MODIFIERS)
            }
            _ => None,
        }
    }
}

/// A `def`, `type`, `class`, `trait` or `object` declaration
#[derive(Debug, Clone)]
pub struct Definition<N> {
    node: N,
    kind: DefinitionKind,
}

impl<N: SyntaxNode> Definition<N> {
    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    pub fn syntax(&self) -> &N {
        &self.node
    }

    pub fn name(&self) -> Option<N> {
        self.node.child_by_field("name")
    }

    /// The `template_body` of a class-like declaration
    pub fn body(&self) -> Option<N> {
        self.node.child_by_field("body")
    }
}

/// A `val` or `var` declaration
#[derive(Debug, Clone)]
pub struct Binding<N>(N);

impl<N: SyntaxNode> Binding<N> {
    pub fn syntax(&self) -> &N {
        &self.0
    }

    pub fn pattern(&self) -> Option<N> {
        self.0.child_by_field("pattern")
    }
}
