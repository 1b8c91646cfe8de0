//! Repository references
//!
//! A `RepoRef` is the `owner/name` pair behind a repository URL.
//!
//! # Examples
//!
//! ```
//! use starmark::core::models::RepoRef;
//!
//! let repo = RepoRef::from_url("https://github.com/rust-lang/regex").unwrap();
//! assert_eq!(repo.owner(), "rust-lang");
//! assert_eq!(repo.name(), "regex");
//! assert_eq!(repo.full_name(), "rust-lang/regex");
//! ```

use crate::core::error::UpdateError;

/// An `owner/name` repository reference, along with the URL it came from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    owner: String,
    name: String,
    url: String,
}

impl RepoRef {
    /// Decompose `scheme://host/owner/name` into a repository reference
    ///
    /// Exactly two non-empty path segments must follow the host.
    pub fn from_url(url: &str) -> Result<Self, UpdateError> {
        let path = url
            .split_once("://")
            .and_then(|(_, rest)| rest.split_once('/'))
            .map(|(_host, path)| path);
        Self::from_path(url, path)
    }

    /// Decompose `<prefix>owner/name` into a repository reference
    ///
    /// `prefix` may carry a path of its own, e.g. `https://example.com/git/`.
    /// A missing trailing slash on `prefix` is tolerated.
    pub fn from_url_with_prefix(url: &str, prefix: &str) -> Result<Self, UpdateError> {
        let prefix = prefix.trim_end_matches('/');
        let path = url.strip_prefix(prefix).and_then(|rest| rest.strip_prefix('/'));
        Self::from_path(url, path)
    }

    fn from_path(url: &str, path: Option<&str>) -> Result<Self, UpdateError> {
        let malformed = || UpdateError::MalformedRepository {
            url: url.to_string(),
        };

        let segments: Vec<&str> = path.ok_or_else(malformed)?.split('/').collect();
        match segments.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: (*owner).to_string(),
                name: (*name).to_string(),
                url: url.to_string(),
            }),
            _ => Err(malformed()),
        }
    }

    /// The owning user or organization
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The URL this reference was parsed from
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `owner/name`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
