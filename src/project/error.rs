//! Error types for project-level operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::hir::ExtractError;

/// Errors that can occur while loading or extracting files from disk.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// IO error while reading a source file.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// The file was read but its structure could not be extracted.
    #[error("{}: {source}", .path.display())]
    Extract {
        path: PathBuf,
        source: ExtractError,
    },
}

impl ProjectError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn walk(path: &Path, source: walkdir::Error) -> Self {
        Self::Walk {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn extract(path: &Path, source: ExtractError) -> Self {
        Self::Extract {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file or directory the error is about
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Walk { path, .. } | Self::Extract { path, .. } => path,
        }
    }
}
