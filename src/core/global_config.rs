//! Global configuration management
//!
//! Reads and manages settings from `config.toml` in the config directory:
//! cache namespace, TTL and location, plus catalog URL, request rate,
//! timeout and user agent. Every setting is optional and falls back to
//! [`crate::config::defaults`].

use crate::config::{defaults, urls};
use crate::error::ConfigError;
use crate::infra::dirs::PkgstackDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration for pkgstack
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Cache configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache namespace (snapshot file name)
    pub namespace: Option<String>,

    /// Cache TTL in seconds
    pub ttl: Option<u64>,

    /// Cache directory
    pub dir: Option<PathBuf>,
}

/// Catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog base URL
    pub url: Option<String>,

    /// Requests per second
    pub requests_per_second: Option<f64>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// User agent sent with every request
    pub user_agent: Option<String>,
}

impl GlobalConfig {
    /// Load global configuration from a specific path
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// If the config file exists but is invalid, returns an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<memory>".to_string(),
            error: e.to_string(),
        })
    }

    /// Fill every unset field with its default
    ///
    /// The result is what the fetcher actually runs with.
    #[must_use]
    pub fn resolved(&self, dirs: &PkgstackDirs) -> Self {
        Self {
            cache: CacheConfig {
                namespace: Some(self.cache_namespace().to_string()),
                ttl: Some(self.cache_ttl().as_secs()),
                dir: Some(self.cache_dir(dirs)),
            },
            catalog: CatalogConfig {
                url: Some(self.catalog_url().to_string()),
                requests_per_second: Some(self.requests_per_second()),
                timeout: Some(self.request_timeout().as_secs()),
                user_agent: Some(self.user_agent().to_string()),
            },
        }
    }

    /// Effective cache namespace
    pub fn cache_namespace(&self) -> &str {
        self.cache
            .namespace
            .as_deref()
            .unwrap_or(defaults::CACHE_NAMESPACE)
    }

    /// Effective cache TTL
    pub fn cache_ttl(&self) -> Duration {
        self.cache
            .ttl
            .map_or_else(defaults::cache_ttl, Duration::from_secs)
    }

    /// Effective cache directory
    pub fn cache_dir(&self, dirs: &PkgstackDirs) -> PathBuf {
        self.cache.dir.clone().unwrap_or_else(|| dirs.cache_dir())
    }

    /// Effective catalog base URL
    pub fn catalog_url(&self) -> &str {
        self.catalog.url.as_deref().unwrap_or(urls::REPOLOGY)
    }

    /// Effective request rate
    pub fn requests_per_second(&self) -> f64 {
        self.catalog
            .requests_per_second
            .unwrap_or(defaults::REQUESTS_PER_SECOND)
    }

    /// Effective request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.catalog
                .timeout
                .unwrap_or(defaults::REQUEST_TIMEOUT_SECS),
        )
    }

    /// Effective user agent
    pub fn user_agent(&self) -> &str {
        self.catalog
            .user_agent
            .as_deref()
            .unwrap_or(defaults::USER_AGENT)
    }
}
