//! Property-based tests for annotation and formatting
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use starmark::core::services::{annotate, format_star_count, strip_annotation};

proptest! {
    /// Stripping twice is the same as stripping once
    #[test]
    fn strip_is_idempotent(title in "\\PC{0,40}") {
        let once = strip_annotation(&title);
        prop_assert_eq!(strip_annotation(&once), once);
    }

    /// Stripping an annotated title gives back the stripped title
    #[test]
    fn strip_removes_fresh_annotation(title in "[A-Za-z][A-Za-z0-9 ._-]{0,30}", stars in 0u64..10_000_000) {
        let annotated = annotate(&strip_annotation(&title), &format_star_count(stars));
        prop_assert_eq!(strip_annotation(&annotated), strip_annotation(&title));
    }

    /// Formatting never produces a leading zero or an empty string
    #[test]
    fn format_has_no_leading_zero(stars in 1u64..u64::MAX) {
        let formatted = format_star_count(stars);
        prop_assert!(!formatted.is_empty());
        prop_assert!(!formatted.starts_with('0'));
    }

    /// Counts of ten thousand or more are whole thousands
    #[test]
    fn large_counts_are_whole_thousands(stars in 10_000u64..100_000_000) {
        prop_assert_eq!(format_star_count(stars), format!("{}k", stars / 1000));
    }
}
