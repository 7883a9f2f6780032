//! Package records returned by the catalog
//!
//! The cache stores these verbatim; fields the catalog adds beyond the ones
//! modelled here are kept in [`Package::extra`]. Optional upstream fields
//! such as `summary` live there too, so an explicit `null` survives a round
//! trip through the cache instead of turning into a missing key.

use serde::{Deserialize, Serialize};

/// Status the catalog assigns to the newest known version
pub const STATUS_NEWEST: &str = "newest";

/// One package of a project in one repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Licenses declared by the repository
    #[serde(default)]
    pub licenses: Vec<String>,

    /// Repository name (e.g. `debian_12`)
    #[serde(default)]
    pub repo: String,

    /// Normalized version
    #[serde(default)]
    pub version: String,

    /// Display name
    #[serde(default, rename = "visiblename")]
    pub visible_name: String,

    /// Version status (`newest`, `outdated`, `legacy`, ...)
    #[serde(default)]
    pub status: String,

    /// Any other fields, preserved as received
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Package {
    /// One-line summary, if the catalog sent a string
    pub fn summary(&self) -> Option<&str> {
        self.extra.get("summary").and_then(serde_json::Value::as_str)
    }

    /// Whether this package carries the newest known version
    pub fn is_newest(&self) -> bool {
        self.status == STATUS_NEWEST
    }
}

/// Packages fetched for one requested project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPackages {
    /// Project identifier as requested
    pub project: String,
    /// Packages, empty if the project is unknown or the fetch failed
    pub packages: Vec<Package>,
}

impl ProjectPackages {
    /// Newest version known to any repository
    pub fn newest_version(&self) -> Option<&str> {
        self.packages
            .iter()
            .find(|p| p.is_newest())
            .map(|p| p.version.as_str())
    }
}
