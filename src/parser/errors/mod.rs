//! Diagnostic handling module
//!
//! This module provides the non-fatal side of error reporting:
//! - Categorized error codes for filtering and documentation
//! - Severity levels
//! - Diagnostics with byte range, line/column and optional hint
//!
//! Fatal structural violations are not diagnostics; see
//! [`crate::hir::ExtractError`].

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{Diagnostic, DiagnosticBuilder, Severity, text_range};
