//! Link extractor - finds repository links in raw text
//!
//! Documents are scanned with a regular expression rather than parsed as
//! Markdown, so malformed documents still work. The scan is hidden behind
//! [`LinkExtractor`] so a structured parser can replace it later.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::error::UpdateError;
use crate::core::models::{LinkMatch, RepoRef};

/// Default repository host prefix
pub const GITHUB_HOST: &str = "https://github.com/";

static GITHUB_LINK: LazyLock<Regex> =
    LazyLock::new(|| link_pattern(GITHUB_HOST).expect("escaped host always compiles"));

/// Finds repository links in a document
pub trait LinkExtractor {
    /// Return every link in order of appearance
    ///
    /// An empty vector means the document has no repository links.
    fn extract(&self, document: &str) -> Vec<LinkMatch>;

    /// Resolve the repository a link points at
    ///
    /// The default reads `owner/name` as the first two path segments after
    /// the URL's authority.
    fn repo_ref(&self, link: &LinkMatch) -> Result<RepoRef, UpdateError> {
        RepoRef::from_url(&link.url)
    }
}

/// Regex-based extractor for `[title](<host><owner>/<repo>)` links
///
/// Only URLs with exactly two path segments after the host match, so links
/// into a sub-path of a repository (`/owner/repo/tree/main`) are skipped.
#[derive(Debug, Clone)]
pub struct RegexExtractor {
    host: String,
    pattern: Regex,
}

impl RegexExtractor {
    /// Create an extractor for links under `host`, e.g. `https://github.com/`
    ///
    /// A missing trailing slash is added.
    pub fn new(host: &str) -> Result<Self, regex::Error> {
        let host = with_trailing_slash(host);
        Ok(Self {
            pattern: link_pattern(&host)?,
            host,
        })
    }

    /// Create an extractor for GitHub links
    #[must_use]
    pub fn github() -> Self {
        Self {
            host: GITHUB_HOST.to_string(),
            pattern: GITHUB_LINK.clone(),
        }
    }
}

impl Default for RegexExtractor {
    fn default() -> Self {
        Self::github()
    }
}

impl LinkExtractor for RegexExtractor {
    fn extract(&self, document: &str) -> Vec<LinkMatch> {
        self.pattern
            .captures_iter(document)
            .map(|caps| LinkMatch::new(&caps[0], &caps[1], &caps[2]))
            .collect()
    }

    fn repo_ref(&self, link: &LinkMatch) -> Result<RepoRef, UpdateError> {
        RepoRef::from_url_with_prefix(&link.url, &self.host)
    }
}

fn with_trailing_slash(host: &str) -> String {
    if host.ends_with('/') {
        host.to_string()
    } else {
        format!("{host}/")
    }
}

fn link_pattern(host: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"\[([^\]]+)\]\(({}[^/)]+/[^/)]+)\)",
        regex::escape(&with_trailing_slash(host))
    ))
}
