//! Catalog URLs

/// Repology base URL
pub const REPOLOGY: &str = "https://repology.org";

/// Path prefix of the per-project API endpoint
pub const PROJECT_API_PATH: &str = "api/v1/project";
