//! Port traits (interfaces) for external dependencies
//!
//! The update pass depends only on these traits, never on a concrete
//! HTTP client. Implementations live in the `adapters` module; tests
//! substitute closures or in-memory maps.

mod star_source;

pub use star_source::{LookupError, StarSource};
