//! Configuration management
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults
//! 2. `~/.starmark/config.toml` (or an explicit `--config` path)
//! 3. Environment: `GITHUB_TOKEN`, `GITHUB_API_URL`
//!
//! ```toml
//! [github]
//! api_url = "https://api.github.com"
//! host = "https://github.com/"
//! timeout_secs = 30
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::services::GITHUB_HOST;
use crate::paths;

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read config {path}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config {path}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level starmark configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// GitHub API settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// API token, only ever taken from the environment
    #[serde(skip)]
    pub token: Option<String>,
}

/// GitHub API settings
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubConfig {
    /// REST API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Prefix of repository links to annotate
    #[serde(default = "default_host")]
    pub host: String,
    /// User-Agent sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_host() -> String {
    GITHUB_HOST.to_string()
}

fn default_user_agent() -> String {
    format!("starmark/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            host: default_host(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load configuration from `path` (or the default location) and the
    /// environment
    ///
    /// A missing file yields defaults. An unreadable or malformed file is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(Self::config_path, Path::to_path_buf);
        let mut config = Self::from_file(&path)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load just the file layer; a missing file yields defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup(TOKEN_ENV).filter(|t| !t.trim().is_empty()) {
            self.token = Some(token);
        }
        if let Some(api_url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.github.api_url = api_url;
        }
    }
}
