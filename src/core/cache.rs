//! Cache administration
//!
//! Reports for the administrative cache commands. Clearing is the one cache
//! operation whose failure is surfaced, as a report distinguishable from
//! success.

use serde::Serialize;

use crate::cache::CacheBackend;
use crate::core::fetch::PackageFetcher;
use crate::core::package::Package;

/// Cache information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    /// Cache namespace
    pub namespace: String,
    /// Where the snapshot lives
    pub location: String,
    /// Number of valid entries
    pub entries: usize,
}

/// Outcome of an administrative cache clear
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearReport {
    /// Whether the empty cache was persisted
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// Underlying error, on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClearReport {
    fn succeeded() -> Self {
        Self {
            success: true,
            message: "Cache cleared successfully".to_string(),
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            message: "Failed to clear cache".to_string(),
            error: Some(error),
        }
    }
}

/// Clear the fetcher's cache and report the result
pub async fn clear_cache<B>(fetcher: &PackageFetcher<B>) -> ClearReport
where
    B: CacheBackend<Vec<Package>>,
{
    match fetcher.clear_cache().await {
        Ok(()) => ClearReport::succeeded(),
        Err(e) => {
            tracing::error!("Failed to clear cache: {}", e);
            ClearReport::failed(e.to_string())
        }
    }
}
