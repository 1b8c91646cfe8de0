//! Command implementations

mod update;

pub use update::{UpdateOptions, update};
