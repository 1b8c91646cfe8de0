//! starmark - annotate repository links in Markdown with their star counts
//!
//! The library scans a document for `[title](https://github.com/owner/repo)`
//! links, looks up each repository's star count through a pluggable
//! [`StarSource`](core::ports::StarSource), and rewrites every title as
//! `title (⭐2.5k)`. Existing annotations are replaced, never duplicated.
//!
//! # Examples
//!
//! ```
//! use starmark::core::models::RepoRef;
//! use starmark::core::ports::LookupError;
//! use starmark::core::services::{RegexExtractor, StarUpdater};
//!
//! let source = |_: &RepoRef| -> Result<u64, LookupError> { Ok(2501) };
//! let updater = StarUpdater::new(RegexExtractor::github(), source);
//! let update = updater.update("[Foo (⭐1k)](https://github.com/o/foo)").unwrap();
//! assert_eq!(update.content, "[Foo (⭐2.5k)](https://github.com/o/foo)");
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
