//! Error code definitions for extraction diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Syntax errors reported by the tree (ERROR / MISSING nodes)
//! - E03xx: Declaration errors (shapes the extractor does not recognize)
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for extraction diagnostics
///
/// Each code names one non-fatal condition, so callers can filter
/// diagnostics without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Syntax errors
    // =========================================================================
    /// Source the grammar could not parse (an ERROR node)
    E0101,
    /// Token the parser had to insert to recover (a MISSING node)
    E0102,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Declaration kind the symbol collector does not recognize
    E0301,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// The parser produced no tree at all
    E0999,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0101")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0301 => "E0301",
            Self::E0999 => "E0999",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unexpected syntax",
            Self::E0102 => "missing token",
            Self::E0301 => "unrecognized symbol kind",
            Self::E0999 => "parser produced no syntax tree",
        }
    }

    /// Check if this code comes from the syntax tree itself
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::E0101 | Self::E0102)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
