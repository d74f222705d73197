//! Syntax kinds for the tree-sitter Scala CST
//!
//! tree-sitter tags every node with the name of the grammar rule that
//! produced it. This enum closes that string space over the tags the
//! extractor understands; everything else maps to `UNKNOWN` and keeps its
//! raw tag on the node for diagnostics.
//!
//! Import structure has two spellings across grammar releases: the older
//! grammar nests `stable_identifier` chains and uses `import_selectors`,
//! `import_wildcard` and `renamed_identifier`; current releases use a flat
//! `path` run with `namespace_selectors`, `namespace_wildcard` and
//! `arrow_renamed_identifier` / `as_renamed_identifier`. Both map to the
//! same kinds here.

/// Node kinds in the Scala syntax tree that extraction dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // ROOT
    // =========================================================================
    COMPILATION_UNIT,

    // =========================================================================
    // PACKAGES & IMPORTS
    // =========================================================================
    PACKAGE_CLAUSE,
    PACKAGE_IDENTIFIER,
    IMPORT_DECLARATION,
    STABLE_IDENTIFIER,
    IMPORT_SELECTORS,
    IMPORT_WILDCARD,
    RENAMED_IDENTIFIER,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    IDENTIFIER,
    OPERATOR_IDENTIFIER,

    // =========================================================================
    // DECLARATIONS
    // =========================================================================
    FUNCTION_DEFINITION,
    TYPE_DEFINITION,
    CLASS_DEFINITION,
    TRAIT_DEFINITION,
    OBJECT_DEFINITION,
    VAL_DEFINITION,
    VAR_DEFINITION,

    // =========================================================================
    // MODIFIERS
    // =========================================================================
    MODIFIERS,
    ACCESS_MODIFIER,

    // =========================================================================
    // PATTERNS (destructuring binders)
    // =========================================================================
    CASE_CLASS_PATTERN,
    TUPLE_PATTERN,
    INFIX_PATTERN,
    CAPTURE_PATTERN,
    ALTERNATIVE_PATTERN,

    // =========================================================================
    // TRIVIA & RECOVERY
    // =========================================================================
    COMMENT,
    ERROR,

    /// Any tag not listed above
    UNKNOWN,
}

impl SyntaxKind {
    /// Classify a raw tree-sitter node tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "compilation_unit" => Self::COMPILATION_UNIT,
            "package_clause" => Self::PACKAGE_CLAUSE,
            "package_identifier" => Self::PACKAGE_IDENTIFIER,
            "import_declaration" => Self::IMPORT_DECLARATION,
            "stable_identifier" => Self::STABLE_IDENTIFIER,
            "import_selectors" | "namespace_selectors" => Self::IMPORT_SELECTORS,
            "import_wildcard" | "namespace_wildcard" => Self::IMPORT_WILDCARD,
            "renamed_identifier" | "arrow_renamed_identifier" | "as_renamed_identifier" => {
                Self::RENAMED_IDENTIFIER
            }
            "identifier" => Self::IDENTIFIER,
            "operator_identifier" => Self::OPERATOR_IDENTIFIER,
            "function_definition" => Self::FUNCTION_DEFINITION,
            "type_definition" => Self::TYPE_DEFINITION,
            "class_definition" => Self::CLASS_DEFINITION,
            "trait_definition" => Self::TRAIT_DEFINITION,
            "object_definition" => Self::OBJECT_DEFINITION,
            "val_definition" => Self::VAL_DEFINITION,
            "var_definition" => Self::VAR_DEFINITION,
            "modifiers" => Self::MODIFIERS,
            "access_modifier" => Self::ACCESS_MODIFIER,
            "case_class_pattern" => Self::CASE_CLASS_PATTERN,
            "tuple_pattern" => Self::TUPLE_PATTERN,
            "infix_pattern" => Self::INFIX_PATTERN,
            "capture_pattern" => Self::CAPTURE_PATTERN,
            "alternative_pattern" => Self::ALTERNATIVE_PATTERN,
            "comment" | "block_comment" => Self::COMMENT,
            "ERROR" => Self::ERROR,
            _ => Self::UNKNOWN,
        }
    }

    /// The canonical tag for this kind (the older grammar's spelling)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::COMPILATION_UNIT => "compilation_unit",
            Self::PACKAGE_CLAUSE => "package_clause",
            Self::PACKAGE_IDENTIFIER => "package_identifier",
            Self::IMPORT_DECLARATION => "import_declaration",
            Self::STABLE_IDENTIFIER => "stable_identifier",
            Self::IMPORT_SELECTORS => "import_selectors",
            Self::IMPORT_WILDCARD => "import_wildcard",
            Self::RENAMED_IDENTIFIER => "renamed_identifier",
            Self::IDENTIFIER => "identifier",
            Self::OPERATOR_IDENTIFIER => "operator_identifier",
            Self::FUNCTION_DEFINITION => "function_definition",
            Self::TYPE_DEFINITION => "type_definition",
            Self::CLASS_DEFINITION => "class_definition",
            Self::TRAIT_DEFINITION => "trait_definition",
            Self::OBJECT_DEFINITION => "object_definition",
            Self::VAL_DEFINITION => "val_definition",
            Self::VAR_DEFINITION => "var_definition",
            Self::MODIFIERS => "modifiers",
            Self::ACCESS_MODIFIER => "access_modifier",
            Self::CASE_CLASS_PATTERN => "case_class_pattern",
            Self::TUPLE_PATTERN => "tuple_pattern",
            Self::INFIX_PATTERN => "infix_pattern",
            Self::CAPTURE_PATTERN => "capture_pattern",
            Self::ALTERNATIVE_PATTERN => "alternative_pattern",
            Self::COMMENT => "comment",
            Self::ERROR => "ERROR",
            Self::UNKNOWN => "unknown",
        }
    }

    /// Leaf identifiers that make up qualified names
    pub fn is_identifier(self) -> bool {
        matches!(self, Self::IDENTIFIER | Self::OPERATOR_IDENTIFIER)
    }

    /// Patterns that bind names by destructuring (`val Array(a, b) = ...`,
    /// `val all @ Some(x) = ...`)
    pub fn is_destructuring_pattern(self) -> bool {
        matches!(
            self,
            Self::CASE_CLASS_PATTERN
                | Self::TUPLE_PATTERN
                | Self::INFIX_PATTERN
                | Self::CAPTURE_PATTERN
                | Self::ALTERNATIVE_PATTERN
        )
    }

    /// Comments, skipped wherever they appear
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::COMMENT)
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
