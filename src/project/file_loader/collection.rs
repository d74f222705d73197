use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::parsing::is_scala_file;
use crate::project::ProjectError;

/// Collect the Scala sources under `root`.
///
/// A file path is returned as-is whatever its extension. A directory is
/// walked recursively (following symlinks) for files with a Scala
/// extension; the result is sorted so runs are deterministic.
pub fn collect_file_paths(root: &Path) -> Result<Vec<PathBuf>, ProjectError> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|err| ProjectError::walk(root, err))?;
        if entry.file_type().is_file() && is_scala_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    paths.sort();
    Ok(paths)
}
