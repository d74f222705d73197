//! Domain constants shared across the extractor.

/// Extension of regular Scala source files
pub const SCALA_EXT: &str = "scala";

/// Extension of Scala script / worksheet files
pub const SCALA_SCRIPT_EXT: &str = "sc";

/// All extensions picked up when collecting sources from a directory
pub const SCALA_EXTENSIONS: &[&str] = &[SCALA_EXT, SCALA_SCRIPT_EXT];

/// Separator between segments of a qualified name
pub const QUALIFIED_SEPARATOR: &str = ".";

/// Final segment emitted for wildcard imports (`import a.b._`)
pub const WILDCARD_SEGMENT: &str = "_";

/// Returns true if `ext` names a Scala source file.
pub fn is_scala_extension(ext: &str) -> bool {
    SCALA_EXTENSIONS.contains(&ext)
}
