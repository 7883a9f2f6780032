//! Default configuration values

use std::time::Duration;

/// Cache namespace used for catalog responses
pub const CACHE_NAMESPACE: &str = "repology-packages";

/// Cache TTL for catalog responses (in seconds)
pub const CACHE_TTL_SECS: u64 = 12 * 60 * 60; // 12 hours

/// Catalog requests allowed per second
pub const REQUESTS_PER_SECOND: f64 = 1.0;

/// Overall timeout for a single catalog request (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connect timeout for catalog requests (in seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Prefix applied to project names to build cache keys
pub const PROJECT_KEY_PREFIX: &str = "project:";

/// User agent sent to the catalog
pub const USER_AGENT: &str = concat!("pkgstack/", env!("CARGO_PKG_VERSION"));

/// Default cache TTL as a [`Duration`]
pub const fn cache_ttl() -> Duration {
    Duration::from_secs(CACHE_TTL_SECS)
}
