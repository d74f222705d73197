//! Diagnostic types
//!
//! A diagnostic is a non-fatal condition found while extracting a file:
//! syntax errors reported by the tree, declarations of an unrecognized
//! kind, or a parse call that produced no tree. Diagnostics never stop
//! extraction; they are returned next to the result.

use text_size::{TextRange, TextSize};

use super::codes::ErrorCode;
use crate::base::Position;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Source the grammar rejected
    #[default]
    Error,
    /// Extraction skipped something it does not understand
    Warning,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// A non-fatal extraction diagnostic
///
/// Provides:
/// - Human-readable message
/// - Source location (byte range and line/column of its start)
/// - Categorized error code
/// - Severity level
/// - Optional hint
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Byte range in the source
    pub range: TextRange,
    /// Start of the range as a zero-based line/column
    pub position: Position,
    /// Categorized error code
    pub code: ErrorCode,
    /// Error severity
    pub severity: Severity,
    /// Optional suggestion for fixing the problem
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a new error-severity diagnostic
    pub fn new(
        message: impl Into<String>,
        range: TextRange,
        position: Position,
        code: ErrorCode,
    ) -> Self {
        Self {
            message: message.into(),
            range,
            position,
            code,
            severity: Severity::Error,
            hint: None,
        }
    }

    /// Create a builder for more complex diagnostic construction
    pub fn builder(code: ErrorCode) -> DiagnosticBuilder {
        DiagnosticBuilder::new(code)
    }

    /// Format the diagnostic for display, hint included
    pub fn format(&self) -> String {
        let mut result = self.to_string();
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {}: {}",
            self.position,
            self.severity.as_str(),
            self.code,
            self.message
        )
    }
}

impl std::error::Error for Diagnostic {}

/// Builder for creating diagnostics
pub struct DiagnosticBuilder {
    code: ErrorCode,
    message: Option<String>,
    range: Option<TextRange>,
    position: Position,
    severity: Severity,
    hint: Option<String>,
}

impl DiagnosticBuilder {
    /// Create a new builder with an error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            range: None,
            position: Position::default(),
            severity: Severity::Error,
            hint: None,
        }
    }

    /// Set the message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the source range
    pub fn range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the line/column of the range start
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the severity
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Add a hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Build the diagnostic, defaulting the message to the code's template
    /// and the range to an empty range at offset zero.
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            range: self
                .range
                .unwrap_or_else(|| TextRange::empty(TextSize::new(0))),
            position: self.position,
            code: self.code,
            severity: self.severity,
            hint: self.hint,
        }
    }
}

/// Convert a node byte range into a `TextRange`.
///
/// Offsets beyond `u32::MAX` saturate; sources that large are not
/// something the extractor is expected to see.
pub fn text_range(range: std::ops::Range<usize>) -> TextRange {
    let clamp = |offset: usize| TextSize::new(u32::try_from(offset).unwrap_or(u32::MAX));
    TextRange::new(clamp(range.start), clamp(range.end.max(range.start)))
}
