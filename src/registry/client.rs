//! Catalog client implementation
//!
//! Fetches per-project package lists from the Repology API.

use reqwest::Url;
use std::time::Duration;

use crate::config::{defaults, urls};
use crate::core::package::Package;
use crate::error::{CatalogError, ConfigError};

/// HTTP client for the package catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// HTTP client
    client: reqwest::Client,
    /// Catalog base URL
    base_url: Url,
}

impl CatalogClient {
    /// Create a catalog client for the public Repology instance
    pub fn new() -> Self {
        Self {
            client: build_http_client(
                defaults::USER_AGENT,
                Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            ),
            base_url: Url::parse(urls::REPOLOGY).unwrap(),
        }
    }

    /// Create a catalog client with a custom base URL
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Self::with_options(
            base_url,
            defaults::USER_AGENT,
            Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        )
    }

    /// Create a catalog client with custom URL, user agent and request timeout
    pub fn with_options(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            error: e.to_string(),
        })?;

        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                secs: timeout.as_secs(),
            });
        }

        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: base_url.to_string(),
                error: "not a base URL".to_string(),
            });
        }

        Ok(Self {
            client: build_http_client(user_agent, timeout),
            base_url: parsed,
        })
    }

    /// Get the catalog base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL of the package list for `project`
    ///
    /// The project is appended as a single, percent-encoded path segment.
    pub fn project_url(&self, project: &str) -> Result<Url, CatalogError> {
        let trimmed = normalize_project(project)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidProject {
                project: project.to_string(),
            })?
            .pop_if_empty()
            .extend(urls::PROJECT_API_PATH.split('/'))
            .push(trimmed);
        Ok(url)
    }

    /// Fetch the package list for `project`
    ///
    /// Every failure (transport, non-success status, undecodable body) is
    /// returned as a [`CatalogError`]; nothing is retried here.
    pub async fn fetch_project(&self, project: &str) -> Result<Vec<Package>, CatalogError> {
        let url = self.project_url(project)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| CatalogError::Network {
            url: url.to_string(),
            error: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| CatalogError::Decode {
            url: url.to_string(),
            error: e.to_string(),
        })
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical form of a project identifier
///
/// Surrounding whitespace is dropped. Empty identifiers and the `.`/`..`
/// path segments are rejected because they cannot name a project.
pub fn normalize_project(project: &str) -> Result<&str, CatalogError> {
    let trimmed = project.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return Err(CatalogError::InvalidProject {
            project: project.to_string(),
        });
    }
    Ok(trimmed)
}

fn build_http_client(user_agent: &str, timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS).min(timeout))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
