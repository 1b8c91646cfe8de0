//! Star annotations on link titles
//!
//! An annotation is ` (⭐<count>)` appended to a link title, where `<count>`
//! is produced by [`format_star_count`](super::format::format_star_count).

use std::sync::LazyLock;

use regex::Regex;

/// Glyph that prefixes every annotation
pub const STAR_GLYPH: char = '⭐';

static TRAILING_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(⭐\x{FE0F}?[0-9]+(?:\.[0-9]+)?[kKmM]?\)\s*$").expect("annotation pattern compiles")
});

/// Remove trailing star annotations from a title and trim it
///
/// Parentheticals that are not star annotations are kept, as are
/// annotations in the middle of a title. Repeated trailing annotations are
/// all removed, so `strip_annotation(strip_annotation(x)) == strip_annotation(x)`.
#[must_use]
pub fn strip_annotation(title: &str) -> String {
    let mut current = title;
    while let Some(found) = TRAILING_ANNOTATION.find(current) {
        current = &current[..found.start()];
    }
    current.trim().to_string()
}

/// Append an annotation for `formatted` to an already stripped title
#[must_use]
pub fn annotate(title: &str, formatted: &str) -> String {
    format!("{title} ({STAR_GLYPH}{formatted})")
}
