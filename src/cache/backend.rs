//! Persistence backends for [`TtlCache`](super::TtlCache)
//!
//! A backend stores and loads whole snapshots. The cache writes the full
//! snapshot after every mutation, so a backend only needs `load` and `save`.

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::entry::CacheEntry;
use crate::error::CacheError;
use crate::infra::filesystem;

/// In-memory image of one cache namespace
pub type Snapshot<V> = HashMap<String, CacheEntry<V>>;

/// Durable storage for cache snapshots
pub trait CacheBackend<V> {
    /// Load the persisted snapshot
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<Snapshot<V>>, CacheError>;

    /// Replace the persisted snapshot
    fn save(&mut self, snapshot: &Snapshot<V>) -> Result<(), CacheError>;

    /// Human-readable storage location
    fn location(&self) -> String;
}

fn namespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap())
}

/// Check that a namespace maps to exactly one file inside the cache directory
pub fn validate_namespace(namespace: &str) -> Result<(), CacheError> {
    if namespace_pattern().is_match(namespace) {
        Ok(())
    } else {
        Err(CacheError::InvalidNamespace {
            namespace: namespace.to_string(),
        })
    }
}

/// One pretty-printed JSON file per namespace: `<dir>/<namespace>.json`
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend for `namespace` under `cache_dir`
    pub fn new(cache_dir: &Path, namespace: &str) -> Result<Self, CacheError> {
        validate_namespace(namespace)?;
        Ok(Self {
            path: cache_dir.join(format!("{namespace}.json")),
        })
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<V> CacheBackend<V> for JsonFileBackend
where
    V: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Option<Snapshot<V>>, CacheError> {
        let Some(content) = filesystem::read_file_if_exists(&self.path)? else {
            return Ok(None);
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| CacheError::Corrupt {
                path: self.path.clone(),
                error: e.to_string(),
            })
    }

    fn save(&mut self, snapshot: &Snapshot<V>) -> Result<(), CacheError> {
        let content = serde_json::to_string_pretty(snapshot)
            .map_err(|e| CacheError::Serialize(e.to_string()))?;
        filesystem::write_file_atomic(&self.path, &content)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Process-local backend
///
/// Clones share the same storage, so a test can keep a handle and inspect
/// what the cache persisted. Writes can be made to fail to exercise the
/// degraded (non-durable) path.
#[derive(Debug)]
pub struct MemoryBackend<V> {
    snapshot: Arc<Mutex<Option<Snapshot<V>>>>,
    fail_writes: Arc<AtomicBool>,
}

impl<V> MemoryBackend<V> {
    /// Create an empty backend
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make subsequent `save` calls fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Snapshot<V>>> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> MemoryBackend<V> {
    /// Last successfully persisted snapshot
    pub fn persisted(&self) -> Option<Snapshot<V>> {
        self.lock().clone()
    }
}

impl<V> Clone for MemoryBackend<V> {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            fail_writes: Arc::clone(&self.fail_writes),
        }
    }
}

impl<V> Default for MemoryBackend<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> CacheBackend<V> for MemoryBackend<V> {
    fn load(&self) -> Result<Option<Snapshot<V>>, CacheError> {
        Ok(self.persisted())
    }

    fn save(&mut self, snapshot: &Snapshot<V>) -> Result<(), CacheError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::Io {
                path: PathBuf::from("<memory>"),
                error: "write rejected".to_string(),
            });
        }
        *self.lock() = Some(snapshot.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
