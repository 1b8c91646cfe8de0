//! Update service - rewrites a document with fresh star annotations
//!
//! This service orchestrates extraction, lookup, stripping and formatting.
//! It performs no I/O itself; lookups go through the [`StarSource`] port.

use log::{debug, info};

use crate::core::error::UpdateError;
use crate::core::models::{RepoRef, StarCount};
use crate::core::ports::StarSource;

use super::annotation::{annotate, strip_annotation};
use super::extractor::LinkExtractor;
use super::format::format_star_count;

/// One link rewritten during an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedLink {
    /// Repository the link points at
    pub repo: RepoRef,
    /// Title as found in the document
    pub old_title: String,
    /// Title after re-annotation
    pub new_title: String,
    /// Star count returned by the source
    pub stars: StarCount,
    /// Compact rendering of `stars`
    pub formatted: String,
}

/// Result of an update pass
#[derive(Debug, Clone)]
pub struct Update {
    /// The rewritten document
    pub content: String,
    /// Links in the order they were processed
    pub links: Vec<UpdatedLink>,
    changed: bool,
}

impl Update {
    /// Whether the rewritten document differs from the input
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.changed
    }
}

/// Rewrites repository links with their current star counts
///
/// Links are processed strictly in document order. For each link the
/// first remaining occurrence of its verbatim span is replaced, so when the
/// same link text appears twice each extracted copy consumes one
/// occurrence in turn.
#[derive(Debug)]
pub struct StarUpdater<E, S> {
    extractor: E,
    source: S,
}

impl<E: LinkExtractor, S: StarSource> StarUpdater<E, S> {
    /// Create an updater from an extractor and a star source
    pub const fn new(extractor: E, source: S) -> Self {
        Self { extractor, source }
    }

    /// Rewrite `document`, annotating every repository link
    ///
    /// The first malformed reference or failed lookup aborts the pass and
    /// no later lookups are made.
    pub fn update(&self, document: &str) -> Result<Update, UpdateError> {
        let matches = self.extractor.extract(document);
        debug!("found {} repository link(s)", matches.len());

        let mut content = document.to_string();
        let mut links = Vec::with_capacity(matches.len());

        for link in matches {
            let repo = self.extractor.repo_ref(&link)?;
            let stars = self.source.stars(&repo).map_err(|source| UpdateError::Lookup {
                url: link.url.clone(),
                source,
            })?;
            debug!("{repo}: {stars} stars");

            let formatted = format_star_count(stars);
            let new_title = annotate(&strip_annotation(&link.title), &formatted);
            let replacement = format!("[{new_title}]({})", link.url);
            content = content.replacen(&link.span, &replacement, 1);

            links.push(UpdatedLink {
                repo,
                old_title: link.title,
                new_title,
                stars,
                formatted,
            });
        }

        info!("updated {} repository link(s)", links.len());
        let changed = content != document;
        Ok(Update {
            content,
            links,
            changed,
        })
    }
}
