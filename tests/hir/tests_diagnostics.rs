//! Diagnostic tests for the HIR layer.
//!
//! Syntax errors and unrecognized declarations are reported next to the
//! result and never suppress it.

use crate::helpers::fact_assertions::*;
use crate::helpers::source_fixtures::*;
use scala_facts::{ErrorCode, ScalaExtractor, Severity, TextSize};

#[test]
fn test_broken_source_still_yields_result() {
    let (result, diagnostics) = extract(UNTERMINATED_OBJECT).unwrap();

    assert_has_syntax_error(&diagnostics);
    assert_eq!(result.file, "Test.scala");
    assert_eq!(result.package, "");
}

#[test]
fn test_garbled_definition_reports_syntax_error() {
    let (_, diagnostics) = extract(GARBLED_DEFINITION).unwrap();

    assert_has_syntax_error(&diagnostics);
    assert!(
        diagnostics
            .iter()
            .filter(|d| d.code.is_syntax())
            .all(|d| d.severity == Severity::Error)
    );
}

#[test]
fn test_missing_names_are_syntax_errors() {
    let (result, diagnostics) = extract(NAMELESS_DECLARATIONS).unwrap();

    assert_has_syntax_error(&diagnostics);
    assert!(diagnostics.iter().all(|d| d.code.is_syntax()));
    assert_symbols(&result, &["X"]);
}

#[test]
fn test_syntax_errors_have_locations() {
    let (_, diagnostics) = extract(GARBLED_DEFINITION).unwrap();

    for diagnostic in &diagnostics {
        assert!(
            diagnostic.range.end() <= TextSize::of(GARBLED_DEFINITION),
            "range out of bounds: {}",
            diagnostic
        );
    }
}

#[test]
fn test_unrecognized_member_is_a_warning() {
    let (result, diagnostics) = extract("object App {\n  println(\"hello\")\n}\n").unwrap();

    assert_symbols(&result, &["App"]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0301);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].position.line, 1);
}

#[test]
fn test_extractor_is_idempotent() {
    let mut extractor = ScalaExtractor::new().unwrap();

    let first = extractor.parse("Server.scala", SERVICE_FILE).unwrap();
    let second = extractor.parse("Server.scala", SERVICE_FILE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_extractor_is_reusable_across_files() {
    let mut extractor = ScalaExtractor::new().unwrap();

    let (broken, _) = extractor.parse("Broken.scala", UNTERMINATED_OBJECT).unwrap();
    let (clean, diagnostics) = extractor.parse("Clean.scala", "object Clean\n").unwrap();

    assert_eq!(broken.file, "Broken.scala");
    assert_eq!(clean.symbols, vec!["Clean"]);
    assert!(diagnostics.is_empty());
}
