//! Exported symbol tests.

use crate::helpers::fact_assertions::*;
use crate::helpers::source_fixtures::*;
use rstest::rstest;

// =============================================================================
// TOP-LEVEL DEFINITIONS
// =============================================================================

#[rstest]
#[case("class Widget\n", &["Widget"])]
#[case("case class Point(x: Int, y: Int)\n", &["Point"])]
#[case("trait Shape\n", &["Shape"])]
#[case("object Registry\n", &["Registry"])]
#[case("abstract class Base\nfinal class Leaf extends Base\n", &["Base", "Leaf"])]
fn test_top_level_definitions(#[case] source: &str, #[case] expected: &[&str]) {
    let result = extract_clean(source);
    assert_symbols(&result, expected);
}

#[rstest]
#[case("private class Hidden\n")]
#[case("protected trait Hidden\n")]
#[case("private[app] object Hidden\n")]
fn test_access_modifiers_hide_definitions(#[case] source: &str) {
    let result = extract_clean(source);
    assert!(result.symbols.is_empty(), "got {:?}", result.symbols);
}

// =============================================================================
// OBJECT MEMBERS
// =============================================================================

#[test]
fn test_object_members_are_qualified() {
    let result = extract_clean(OBJECT_WITH_MEMBERS);
    assert_symbols(
        &result,
        &["Config", "Config.name", "Config.load", "Config.Entry"],
    );
}

#[test]
fn test_nested_objects() {
    let result = extract_clean(NESTED_OBJECTS);
    assert_symbols(
        &result,
        &["Outer", "Outer.Inner", "Outer.Inner.deep", "Outer.shallow"],
    );
}

#[test]
fn test_private_object_hides_members() {
    let result = extract_clean(PRIVATE_OBJECT);
    assert!(result.symbols.is_empty());
}

#[test]
fn test_class_members_are_not_exported() {
    let result = extract_clean("class Box {\n  def open = 1\n  val size = 2\n}\n");
    assert_symbols(&result, &["Box"]);
}

// =============================================================================
// BINDINGS
// =============================================================================

#[test]
fn test_val_and_var_in_object() {
    let result = extract_clean("object Store {\n  val limit = 10\n  var count = 0\n}\n");
    assert_symbols(&result, &["Store", "Store.limit", "Store.count"]);
}

#[rstest]
#[case("object Pair {\n  val Array(one, two) = Array(1, 2)\n}\n")]
#[case("object Pair {\n  val (one, two) = (1, 2)\n}\n")]
#[case("object Pair {\n  val all @ Some(one) = Option(1)\n}\n")]
fn test_destructuring_val_exports_nothing(#[case] source: &str) {
    let result = extract_clean(source);
    assert_symbols(&result, &["Pair"]);
}

#[test]
fn test_comments_are_ignored() {
    let result = extract_clean("// header\n/* block */\nobject A {\n  // inner\n  def f = 1\n}\n");
    assert_symbols(&result, &["A", "A.f"]);
}

// =============================================================================
// WHOLE FILES
// =============================================================================

#[test]
fn test_service_file_symbols() {
    let result = extract_clean(SERVICE_FILE);

    assert_eq!(result.package, "com.example.http");
    assert_symbols(&result, &["Server", "Server.main", "Handler", "Request"]);
}
