//! Package clause tests.

use crate::helpers::fact_assertions::*;
use crate::helpers::source_fixtures::*;
use rstest::rstest;
use scala_facts::ExtractError;

#[rstest]
#[case("package app\n", "app")]
#[case("package com.example.app\n", "com.example.app")]
#[case("object NoPackage\n", "")]
#[case("", "")]
fn test_package_name(#[case] source: &str, #[case] expected: &str) {
    let result = extract_clean(source);
    assert_eq!(result.package, expected);
}

#[test]
fn test_package_does_not_leak_into_symbols() {
    let result = extract_clean(DOTTED_PACKAGE);

    assert_eq!(result.package, "com.example.app");
    assert_symbols(&result, &["Service"]);
}

#[test]
fn test_file_identifier_is_passed_through() {
    let result = extract_clean(SIMPLE_PACKAGE);
    assert_eq!(result.file, "Test.scala");
    assert!(!result.has_main);
}

#[test]
fn test_two_package_clauses_are_fatal() {
    let err = extract_err(TWO_PACKAGES);

    assert!(matches!(err, ExtractError::MultiplePackages { .. }));
    assert!(err.to_string().contains("Test.scala"));
}
