//! Centralized path definitions for starmark
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.starmark/
//! └── config.toml               # API endpoint, host, timeouts
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".starmark";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global starmark directory.
///
/// Returns `~/.starmark/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.starmark/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
