//! Star source port
//!
//! Defines the interface for resolving a repository to its star count.

use thiserror::Error;

use super::super::models::{RepoRef, StarCount};

/// Errors a star source can report
#[derive(Debug, Error)]
pub enum LookupError {
    /// No API token is available
    #[error("GITHUB_TOKEN environment variable not set")]
    MissingToken,

    /// The service rejected the credentials (or rate limited them)
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The repository does not exist or is not visible
    #[error("repository not found: {0}")]
    NotFound(String),

    /// Any other non-success HTTP status
    #[error("unexpected status {status} for {repo}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Repository being resolved
        repo: String,
    },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be understood
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Resolves repositories to their current star count
///
/// Implementations handle the actual lookup (HTTP API, fixtures, caches).
/// Any closure with the right signature is a star source, which keeps
/// tests free of network access.
pub trait StarSource {
    /// Get the current star count for a repository
    fn stars(&self, repo: &RepoRef) -> Result<StarCount, LookupError>;
}

impl<F> StarSource for F
where
    F: Fn(&RepoRef) -> Result<StarCount, LookupError>,
{
    fn stars(&self, repo: &RepoRef) -> Result<StarCount, LookupError> {
        self(repo)
    }
}
