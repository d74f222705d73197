//! Fact extraction from the syntax tree, as pure functions over [`SyntaxNode`].
//!
//! [`SyntaxNode`]: crate::parser::SyntaxNode
//!
//! # Module structure
//!
//! - [`types`] - `ParseResult`
//! - [`context`] - Namespace prefix and per-file extraction state
//! - [`qualified`] - Package and stable-identifier readers
//! - [`extract`] - Entry point and root dispatch
//! - [`extract_import`] - Import expressions and selectors
//! - [`extract_member`] - Exported declarations, recursing into objects
//! - [`visibility`] - Access-modifier filter

mod context;
mod extract;
mod extract_import;
mod extract_member;
mod qualified;
mod types;
mod visibility;


pub use extract::extract_facts;
pub use types::ParseResult;
