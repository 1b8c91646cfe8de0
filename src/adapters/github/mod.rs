//! GitHub adapter
//!
//! Implements `StarSource` against the GitHub REST API using a blocking
//! `reqwest` client. One request is made per repository:
//! `GET {api_url}/repos/{owner}/{repo}`.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::config::GitHubConfig;
use crate::core::models::{RepoRef, StarCount};
use crate::core::ports::{LookupError, StarSource};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// The part of the repository payload we care about
#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    stargazers_count: StarCount,
}

/// Star source backed by the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client from configuration and an API token
    ///
    /// A missing or blank token is only reported when a lookup is made, so
    /// documents without repository links need no credentials.
    pub fn new(config: &GitHubConfig, token: Option<&str>) -> Result<Self, LookupError> {
        let token = token.map(str::trim).filter(|t| !t.is_empty()).map(String::from);

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Base API URL requests are sent to
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn repository_url(&self, repo: &RepoRef) -> String {
        format!("{}/repos/{}/{}", self.api_url, repo.owner(), repo.name())
    }
}

impl StarSource for GitHubClient {
    fn stars(&self, repo: &RepoRef) -> Result<StarCount, LookupError> {
        let token = self.token.as_deref().ok_or(LookupError::MissingToken)?;
        let url = self.repository_url(repo);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION)
            .send()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(LookupError::Unauthorized(repo.full_name()));
            },
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound(repo.full_name())),
            s if !s.is_success() => {
                return Err(LookupError::Status {
                    status: s.as_u16(),
                    repo: repo.full_name(),
                });
            },
            _ => {},
        }

        let payload: RepositoryPayload =
            response.json().map_err(|e| LookupError::InvalidResponse(e.to_string()))?;
        Ok(payload.stargazers_count)
    }
}
