//! Project layer tests: collecting and extracting files on disk.

pub mod tests_batch;
