//! Batch extraction over a source tree.

use crate::helpers::source_fixtures::*;
use rstest::rstest;
use scala_facts::project::{ProjectError, collect_file_paths, extract_file, extract_files};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn source_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/main/scala/Server.scala", SERVICE_FILE);
    write(temp.path(), "src/main/scala/Config.scala", OBJECT_WITH_MEMBERS);
    write(temp.path(), "build.sc", "object build\n");
    write(temp.path(), "README.md", "# not scala\n");
    temp
}

#[test]
fn test_extract_source_tree() {
    let temp = source_tree();

    let paths = collect_file_paths(temp.path()).unwrap();
    assert_eq!(paths.len(), 3);

    let outcomes = extract_files(&paths);
    assert!(outcomes.iter().all(|o| o.is_ok()));

    let server = outcomes
        .iter()
        .find(|o| o.path.ends_with("Server.scala"))
        .unwrap();
    let (result, diagnostics) = server.result.as_ref().unwrap();
    assert_eq!(result.package, "com.example.http");
    assert_eq!(result.file, server.path.display().to_string());
    assert!(diagnostics.is_empty());
}

#[rstest]
#[case("Broken.scala", UNTERMINATED_OBJECT, false)]
#[case("Clean.scala", "trait Clean\n", true)]
fn test_diagnostics_per_file(
    #[case] name: &str,
    #[case] content: &str,
    #[case] clean: bool,
) {
    let temp = TempDir::new().unwrap();
    write(temp.path(), name, content);

    let (_, diagnostics) = extract_file(&temp.path().join(name)).unwrap();
    assert_eq!(diagnostics.is_empty(), clean);
}

#[test]
fn test_fatal_file_does_not_stop_batch() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "A.scala", TWO_PACKAGES);
    write(temp.path(), "B.scala", "object B\n");

    let paths = collect_file_paths(temp.path()).unwrap();
    let outcomes = extract_files(&paths);

    assert_eq!(outcomes.len(), 2);
    match &outcomes[0].result {
        Err(err @ ProjectError::Extract { .. }) => {
            assert!(err.to_string().contains("multiple package declarations"));
        }
        other => panic!("expected an extraction error, got {other:?}"),
    }
    assert!(outcomes[1].is_ok());
}
