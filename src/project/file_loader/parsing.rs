use std::path::Path;

use crate::base::constants::is_scala_extension;
use crate::project::ProjectError;

/// The extension of `path`, if it has a UTF-8 one
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Whether `path` names a Scala source (`.scala` or `.sc`)
pub fn is_scala_file(path: &Path) -> bool {
    get_extension(path).is_some_and(is_scala_extension)
}

/// Read a source file as UTF-8 text.
pub fn load_file(path: &Path) -> Result<String, ProjectError> {
    std::fs::read_to_string(path).map_err(|err| ProjectError::io(path, err))
}
