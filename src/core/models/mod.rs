//! Domain models
//!
//! Pure data types with no I/O dependencies.

mod link;
mod repo;

pub use link::LinkMatch;
pub use repo::RepoRef;

/// A repository's star count as reported by its hosting service
pub type StarCount = u64;
