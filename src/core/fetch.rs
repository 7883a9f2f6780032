//! Package fetch orchestration
//!
//! Looks each project up in the durable cache and, on a miss, asks the
//! catalog for it behind the shared rate limiter. Projects are processed one
//! at a time so the limiter's single slot is never contended.
//!
//! Failures are absorbed: a failed project yields an empty package list and
//! nothing is cached for it, so the next call tries the network again.

use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::cache::{CacheBackend, JsonFileBackend, TtlCache};
use crate::config::defaults;
use crate::core::cache::CacheInfo;
use crate::core::global_config::GlobalConfig;
use crate::core::package::{Package, ProjectPackages};
use crate::error::{CacheError, CatalogError, PkgstackError};
use crate::infra::dirs::PkgstackDirs;
use crate::registry::client::normalize_project;
use crate::registry::{CatalogClient, RateLimiter};

/// Progress callback for multi-project fetches: (`done`, `total`, `project`)
pub type ProgressCallback = Box<dyn Fn(usize, usize, &str) + Send + Sync>;

/// How a single project lookup was resolved
#[derive(Debug)]
pub enum FetchOutcome {
    /// Served from the cache
    Hit(Vec<Package>),
    /// Fetched from the catalog and cached
    Fetched(Vec<Package>),
    /// Catalog request failed; nothing was cached
    Failed(CatalogError),
}

impl FetchOutcome {
    /// Packages to hand back to the caller (empty on failure)
    pub fn into_packages(self) -> Vec<Package> {
        match self {
            Self::Hit(packages) | Self::Fetched(packages) => packages,
            Self::Failed(_) => Vec::new(),
        }
    }

    /// Whether the cache answered
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// Whether the catalog request failed
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Cached, rate-limited package fetcher
#[derive(Debug)]
pub struct PackageFetcher<B = JsonFileBackend> {
    client: CatalogClient,
    cache: Mutex<TtlCache<Vec<Package>, B>>,
    limiter: RateLimiter,
    ttl: Duration,
}

impl PackageFetcher<JsonFileBackend> {
    /// Build a fetcher from the effective configuration
    pub fn from_config(config: &GlobalConfig, dirs: &PkgstackDirs) -> Result<Self, PkgstackError> {
        let client = CatalogClient::with_options(
            config.catalog_url(),
            config.user_agent(),
            config.request_timeout(),
        )?;
        let limiter = RateLimiter::new(config.requests_per_second())?;
        let cache_dir: PathBuf = config.cache_dir(dirs);
        let cache = TtlCache::open(&cache_dir, config.cache_namespace())?;

        Ok(Self::new(client, cache, limiter, config.cache_ttl()))
    }
}

impl<B> PackageFetcher<B>
where
    B: CacheBackend<Vec<Package>>,
{
    /// Assemble a fetcher from its parts
    pub fn new(
        client: CatalogClient,
        cache: TtlCache<Vec<Package>, B>,
        limiter: RateLimiter,
        ttl: Duration,
    ) -> Self {
        Self {
            client,
            cache: Mutex::new(cache),
            limiter,
            ttl,
        }
    }

    /// Cache key for a project
    pub fn cache_key(project: &str) -> String {
        format!("{}{project}", defaults::PROJECT_KEY_PREFIX)
    }

    /// TTL applied to fetched results
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Resolve one project and report how it was resolved
    ///
    /// The identifier is normalized once, so the cache key and the request
    /// always name the same project. Invalid identifiers fail before a
    /// rate-limiter permit is taken.
    pub async fn fetch_one_detailed(&self, project: &str) -> FetchOutcome {
        let project = match normalize_project(project) {
            Ok(project) => project,
            Err(e) => {
                tracing::warn!("Skipping project {:?}: {}", project, e);
                return FetchOutcome::Failed(e);
            }
        };
        let key = Self::cache_key(project);

        if let Some(packages) = self.cache.lock().await.get(&key) {
            tracing::debug!("Cache hit for project: {}", project);
            return FetchOutcome::Hit(packages);
        }

        tracing::info!("Cache miss for project: {}, fetching from catalog", project);
        self.limiter.wait_if_needed().await;

        match self.client.fetch_project(project).await {
            Ok(packages) => {
                self.cache
                    .lock()
                    .await
                    .set(key, packages.clone(), self.ttl);
                FetchOutcome::Fetched(packages)
            }
            Err(e) => {
                tracing::warn!("Failed to fetch data for {}: {}", project, e);
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Packages for one project; empty if the catalog request failed
    pub async fn fetch_one(&self, project: &str) -> Vec<Package> {
        self.fetch_one_detailed(project).await.into_packages()
    }

    /// Packages for many projects, in request order
    pub async fn fetch_many<S: AsRef<str>>(&self, projects: &[S]) -> Vec<ProjectPackages> {
        self.fetch_many_with_progress(projects, None).await
    }

    /// Like [`Self::fetch_many`], reporting progress after each project
    ///
    /// Projects are processed strictly sequentially; duplicates are processed
    /// independently (the second one is normally a cache hit).
    pub async fn fetch_many_with_progress<S: AsRef<str>>(
        &self,
        projects: &[S],
        progress: Option<ProgressCallback>,
    ) -> Vec<ProjectPackages> {
        tracing::info!("Fetching data for {} projects...", projects.len());

        let total = projects.len();
        let mut results = Vec::with_capacity(total);
        let (mut hits, mut failures) = (0usize, 0usize);

        for (index, project) in projects.iter().enumerate() {
            let project = project.as_ref();
            let outcome = self.fetch_one_detailed(project).await;
            hits += usize::from(outcome.is_hit());
            failures += usize::from(outcome.is_failure());

            results.push(ProjectPackages {
                project: project.to_string(),
                packages: outcome.into_packages(),
            });

            if let Some(cb) = &progress {
                cb(index + 1, total, project);
            }
        }

        tracing::info!(
            hits,
            failures,
            fetched = total - hits - failures,
            "Finished fetching all project data"
        );
        results
    }

    /// Drop every cached entry
    ///
    /// Fails only if the empty store could not be persisted.
    pub async fn clear_cache(&self) -> Result<(), CacheError> {
        self.cache.lock().await.clear()?;
        tracing::info!("Cache cleared");
        Ok(())
    }

    /// Remove expired entries; returns how many were removed
    pub async fn cleanup_expired_cache(&self) -> usize {
        let removed = self.cache.lock().await.cleanup();
        tracing::info!(removed, "Expired cache entries cleaned up");
        removed
    }

    /// Describe the cache
    pub async fn cache_info(&self) -> CacheInfo {
        let mut cache = self.cache.lock().await;
        CacheInfo {
            namespace: cache.namespace().to_string(),
            location: cache.location(),
            entries: cache.len(),
        }
    }
}
