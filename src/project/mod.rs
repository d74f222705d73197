//! Project management: finding, reading and extracting Scala files on disk.

mod batch;
mod error;
pub mod file_loader;

pub use batch::{FileFacts, FileOutcome, extract_file, extract_files, extract_source};
pub use error::ProjectError;
pub use file_loader::collect_file_paths;
