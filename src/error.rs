//! Error types for pkgstack
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Durable cache errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// Namespace cannot be mapped to a cache file
    #[error("Invalid cache namespace '{namespace}': use letters, digits, '.', '_' or '-'")]
    InvalidNamespace { namespace: String },

    /// IO error while persisting or loading the snapshot
    #[error("Cache IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },

    /// Persisted snapshot exists but cannot be parsed
    #[error("Corrupt cache snapshot '{path}': {error}")]
    Corrupt { path: PathBuf, error: String },

    /// Snapshot could not be serialized
    #[error("Failed to serialize cache snapshot: {0}")]
    Serialize(String),
}

/// Catalog (upstream) errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Project identifier is not usable in a request
    #[error("Invalid project identifier '{project}'")]
    InvalidProject { project: String },

    /// Transport failure (connect, timeout, reset)
    #[error("Network error requesting '{url}': {error}")]
    Network { url: String, error: String },

    /// Upstream answered with a non-success status
    #[error("Catalog returned HTTP {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Response body was not a package list
    #[error("Failed to decode catalog response from '{url}': {error}")]
    Decode { url: String, error: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Rate limit must be a positive, finite number
    #[error("Invalid request rate {rate}: must be a positive number of requests per second")]
    InvalidRate { rate: f64 },

    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },

    /// Request timeout must be at least one second
    #[error("Invalid request timeout {secs}s: must be at least 1 second")]
    InvalidTimeout { secs: u64 },

    /// Catalog URL is not a valid base URL
    #[error("Invalid catalog URL '{url}': {error}")]
    InvalidUrl { url: String, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to move a file into place
    #[error("Failed to rename '{from}' to '{to}': {error}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },
}

impl From<FilesystemError> for CacheError {
    fn from(err: FilesystemError) -> Self {
        match err {
            FilesystemError::CreateDir { path, error }
            | FilesystemError::WriteFile { path, error }
            | FilesystemError::ReadFile { path, error }
            | FilesystemError::Rename { to: path, error, .. } => CacheError::Io { path, error },
        }
    }
}

/// Top-level pkgstack error type
#[derive(Error, Debug)]
pub enum PkgstackError {
    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
