//! Extraction of many files in parallel.
//!
//! tree-sitter parsers are not thread-safe, so each rayon worker keeps its
//! own [`ScalaExtractor`] in a thread-local slot, created on first use.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::hir::{ExtractError, ParseResult, ScalaExtractor};
use crate::parser::errors::Diagnostic;

use super::error::ProjectError;
use super::file_loader::load_file;

thread_local! {
    /// Thread-local extractor (one tree-sitter parser per thread)
    static EXTRACTOR: RefCell<Option<ScalaExtractor>> = const { RefCell::new(None) };
}

/// Facts and diagnostics of one successfully extracted file
pub type FileFacts = (ParseResult, Vec<Diagnostic>);

/// The result of extracting one file of a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FileFacts, ProjectError>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Diagnostics of the file; empty when extraction failed
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match &self.result {
            Ok((_, diagnostics)) => diagnostics,
            Err(_) => &[],
        }
    }
}

/// Run `f` with this thread's extractor.
fn with_extractor<T>(
    f: impl FnOnce(&mut ScalaExtractor) -> Result<T, ExtractError>,
) -> Result<T, ExtractError> {
    EXTRACTOR.with(|cell| {
        let mut slot = cell.borrow_mut();
        let extractor = match slot.take() {
            Some(extractor) => extractor,
            None => ScalaExtractor::new()?,
        };
        f(slot.insert(extractor))
    })
}

/// Extract facts from in-memory source with this thread's extractor.
///
/// `file` is recorded in the result as given.
pub fn extract_source(file: &str, source: &str) -> Result<FileFacts, ExtractError> {
    with_extractor(|extractor| extractor.parse(file, source))
}

/// Read and extract one file.
///
/// The result's `file` is the path as given, rendered with `display()`.
pub fn extract_file(path: &Path) -> Result<FileFacts, ProjectError> {
    let source = load_file(path)?;
    let file = path.display().to_string();
    extract_source(&file, &source).map_err(|err| ProjectError::extract(path, err))
}

/// Extract every file in `paths` in parallel.
///
/// Outcomes come back in input order. A failure is confined to its own
/// outcome and never affects another file.
pub fn extract_files(paths: &[PathBuf]) -> Vec<FileOutcome> {
    debug!(files = paths.len(), "extracting batch");
    paths
        .par_iter()
        .map(|path| FileOutcome {
            path: path.clone(),
            result: extract_file(path),
        })
        .collect()
}
