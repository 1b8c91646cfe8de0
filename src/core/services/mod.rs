//! Business logic services
//!
//! Pure logic that operates on text and domain models.
//!
//! - [`extractor`] - Find repository links in a document
//! - [`annotation`] - Strip and add star annotations on titles
//! - [`format`] - Compact star count formatting
//! - [`updater`] - Rewrite a document using a star source

pub mod annotation;
pub mod extractor;
pub mod format;
pub mod updater;

pub use annotation::{STAR_GLYPH, annotate, strip_annotation};
pub use extractor::{GITHUB_HOST, LinkExtractor, RegexExtractor};
pub use format::format_star_count;
pub use updater::{StarUpdater, Update, UpdatedLink};
