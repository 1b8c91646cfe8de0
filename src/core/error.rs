//! Errors raised while updating a document

use thiserror::Error;

use super::ports::LookupError;

/// Errors that abort an update pass
///
/// Any of these stops the whole pass: no partially rewritten document is
/// returned.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// A matched URL did not decompose into exactly `owner/name`
    #[error("malformed repository reference: {url}")]
    MalformedRepository {
        /// The offending URL
        url: String,
    },

    /// The star source could not resolve a repository
    #[error("failed to look up stars for {url}")]
    Lookup {
        /// The repository URL being resolved
        url: String,
        /// The underlying lookup failure
        #[source]
        source: LookupError,
    },
}
