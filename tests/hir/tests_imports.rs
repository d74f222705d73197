//! Import resolution tests.

use crate::helpers::fact_assertions::*;
use crate::helpers::source_fixtures::*;
use rstest::rstest;

#[rstest]
#[case("import com.twitter.finagle.http\n", &["com.twitter.finagle.http"])]
#[case("import a.b._\n", &["a.b._"])]
#[case("import a.b.{c, d => e}\n", &["a.b.c", "a.b.d"])]
#[case("import scala.collection.mutable\n", &["scala.collection.mutable"])]
#[case("import a.b.c, d.e.f\n", &["a.b.c", "d.e.f"])]
fn test_import_resolution(#[case] source: &str, #[case] expected: &[&str]) {
    let result = extract_clean(source);
    assert_imports(&result, expected);
}

#[test]
fn test_imports_in_declaration_order() {
    let source = "import z.Last\nimport a.First\nimport z.Last\n";
    let result = extract_clean(source);

    assert_imports(&result, &["z.Last", "a.First", "z.Last"]);
}

#[test]
fn test_imports_do_not_export_symbols() {
    let result = extract_clean("import a.b.C\n");
    assert!(result.symbols.is_empty());
}

#[test]
fn test_service_file_imports() {
    let result = extract_clean(SERVICE_FILE);

    assert_imports(
        &result,
        &[
            "com.twitter.finagle.http",
            "com.twitter.util.Await",
            "com.twitter.util.Future",
            "scala.collection.mutable._",
        ],
    );
}
