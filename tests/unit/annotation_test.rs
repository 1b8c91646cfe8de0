//! Annotation stripping and building tests

use starmark::core::services::{annotate, strip_annotation};
use test_case::test_case;

#[test_case("Project1 (⭐1k)", "Project1" ; "thousands")]
#[test_case("Project2 (⭐1.5k)", "Project2" ; "decimal thousands")]
#[test_case("Project3", "Project3" ; "no annotation")]
#[test_case("Project4 (⭐999)", "Project4" ; "plain number")]
#[test_case("Project5(⭐12k)", "Project5" ; "no space before annotation")]
#[test_case(" Project6 ", "Project6" ; "surrounding whitespace")]
#[test_case("Project7 (\u{2B50}\u{FE0F}2.5k)", "Project7" ; "emoji presentation star")]
#[test_case("Tool (beta)", "Tool (beta)" ; "unrelated parenthetical kept")]
#[test_case("Tool (⭐ many)", "Tool (⭐ many)" ; "non numeric star text kept")]
#[test_case("Tool (⭐1k) (⭐2k)", "Tool" ; "stacked annotations removed")]
fn test_strip_annotation(input: &str, expected: &str) {
    assert_eq!(strip_annotation(input), expected);
}

#[test]
fn test_annotate_then_strip_recovers_title() {
    let title = "OpenAPI Explorer (web component)";
    assert_eq!(strip_annotation(&annotate(title, "2.5k")), title);
}

#[test]
fn test_annotate_format() {
    assert_eq!(annotate("TestRepo", "42"), "TestRepo (⭐42)");
}
