//! Foundation types for the scala-facts toolchain.
//!
//! This module provides fundamental types used throughout the extractor:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`Position`] - Zero-based line/column position of a node
//! - Domain constants (file extensions, import wildcard)
//!
//! This module has NO dependencies on other scala-facts modules.

pub mod constants;
mod position;

pub use position::Position;

pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
