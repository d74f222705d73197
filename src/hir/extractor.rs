//! The extraction facade: parse a source string and extract its facts.

use tracing::warn;

use crate::parser::ScalaParser;
use crate::parser::errors::{Diagnostic, ErrorCode};
use crate::syntax::SyntaxFile;

use super::error::ExtractError;
use super::symbols::{ParseResult, extract_facts};

/// Extracts build facts from Scala sources.
///
/// Holds one tree-sitter parser that is reused across calls. Calls are
/// independent: parsing the same input twice gives equal results.
#[derive(Debug)]
pub struct ScalaExtractor {
    parser: ScalaParser,
}

impl ScalaExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            parser: ScalaParser::new()?,
        })
    }

    /// Extract the facts of one file.
    ///
    /// Returns the result with every non-fatal diagnostic, or the first
    /// structural violation. A parse that yields no tree at all is a
    /// diagnostic (E0999) next to an empty result.
    pub fn parse(
        &mut self,
        file_path: &str,
        source: &str,
    ) -> Result<(ParseResult, Vec<Diagnostic>), ExtractError> {
        let Some(syntax) = SyntaxFile::parse(&mut self.parser, source) else {
            warn!(file = file_path, "parser produced no syntax tree");
            let diagnostic = Diagnostic::builder(ErrorCode::E0999)
                .message(format!("failed to parse {file_path}"))
                .build();
            return Ok((ParseResult::new(file_path), vec![diagnostic]));
        };

        extract_facts(file_path, &syntax.root(), syntax.source())
    }
}
