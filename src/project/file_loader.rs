mod collection;
mod parsing;

// Re-export core file loading functions
pub use collection::collect_file_paths;
pub use parsing::{get_extension, is_scala_file, load_file};
