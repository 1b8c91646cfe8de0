//! Compact star count formatting

use crate::core::models::StarCount;

/// Format a star count for display in a link title
///
/// - below 1000: the exact number (`999`)
/// - below 10000: thousands with one truncated decimal, dropped when it is
///   zero (`2501` → `2.5k`, `5038` → `5k`)
/// - otherwise: whole thousands, truncated (`78456` → `78k`)
///
/// # Examples
///
/// ```
/// use starmark::core::services::format_star_count;
///
/// assert_eq!(format_star_count(42), "42");
/// assert_eq!(format_star_count(4708), "4.7k");
/// assert_eq!(format_star_count(12000), "12k");
/// ```
#[must_use]
pub fn format_star_count(stars: StarCount) -> String {
    if stars < 1000 {
        return stars.to_string();
    }
    if stars >= 10_000 {
        return format!("{}k", stars / 1000);
    }

    let whole = stars / 1000;
    let tenths = (stars % 1000) / 100;
    if tenths == 0 {
        format!("{whole}k")
    } else {
        format!("{whole}.{tenths}k")
    }
}
