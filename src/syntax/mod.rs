// Parsed source files and the syntax-error query
pub mod file;

pub use file::{SyntaxFile, collect_syntax_errors};

// Re-export Position from base for convenience
pub use crate::base::Position;
