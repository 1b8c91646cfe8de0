//! Core domain logic for starmark
//!
//! This module contains pure business logic with no I/O dependencies.
//! The star lookup is abstracted through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`LinkMatch`, `RepoRef`)
//! - `services/` - Extraction, annotation, formatting and the update pass
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Errors raised by the update pass

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
