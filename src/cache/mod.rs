//! Durable TTL cache
//!
//! A generic key/value store with per-entry expiry. Each cache instance owns
//! one namespace and mirrors its whole store to a [`CacheBackend`] after every
//! mutation, so the persisted copy is the source of truth for the next process.
//!
//! Loading is best-effort: a missing or unparseable snapshot is a cold start,
//! never an error. Write failures on `get`/`set`/`cleanup` are logged and the
//! in-memory state stays authoritative until the next successful write.
//!
//! All operations take `&mut self`; callers sharing a cache across tasks wrap
//! it in a mutex, which totally orders an expiring `get` against a `set` of
//! the same key.

pub mod backend;
pub mod entry;

pub use backend::{CacheBackend, JsonFileBackend, MemoryBackend, Snapshot};
pub use entry::CacheEntry;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

use crate::error::CacheError;
use entry::now_millis;

/// Time-to-live cache backed by a snapshot store
#[derive(Debug)]
pub struct TtlCache<V, B = JsonFileBackend> {
    namespace: String,
    entries: Snapshot<V>,
    backend: B,
}

impl<V> TtlCache<V, JsonFileBackend>
where
    V: Serialize + DeserializeOwned + Clone,
{
    /// Open the file-backed cache for `namespace` under `cache_dir`
    ///
    /// Fails only if the namespace cannot be mapped to a file name.
    pub fn open(cache_dir: &Path, namespace: &str) -> Result<Self, CacheError> {
        let backend = JsonFileBackend::new(cache_dir, namespace)?;
        Ok(Self::with_backend(namespace, backend))
    }
}

impl<V, B> TtlCache<V, B>
where
    V: Clone,
    B: CacheBackend<V>,
{
    /// Create a cache over `backend`, hydrating from whatever it holds
    pub fn with_backend(namespace: impl Into<String>, backend: B) -> Self {
        let namespace = namespace.into();
        let entries = match backend.load() {
            Ok(Some(entries)) => {
                tracing::debug!(
                    namespace = %namespace,
                    entries = entries.len(),
                    "Hydrated cache from {}",
                    backend.location()
                );
                entries
            }
            Ok(None) => {
                tracing::debug!(namespace = %namespace, "No persisted cache, starting empty");
                Snapshot::new()
            }
            Err(e) => {
                tracing::debug!(namespace = %namespace, "Discarding unreadable cache: {}", e);
                Snapshot::new()
            }
        };

        Self {
            namespace,
            entries,
            backend,
        }
    }

    /// Namespace this cache was opened for
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Where the snapshot is persisted
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Get a valid entry's data
    ///
    /// An expired entry is removed (and the removal persisted) before `None`
    /// is returned.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, now_millis())
    }

    pub(crate) fn get_at(&mut self, key: &str, now: u64) -> Option<V> {
        let entry = self.entries.get(key)?;
        if entry.is_valid_at(now) {
            return Some(entry.data.clone());
        }

        tracing::debug!(namespace = %self.namespace, key, "Cache entry expired");
        self.entries.remove(key);
        self.persist_or_log();
        None
    }

    /// Store `data` under `key`, stamped now, and persist the store
    pub fn set(&mut self, key: impl Into<String>, data: V, ttl: Duration) {
        self.set_at(key, data, ttl, now_millis());
    }

    pub(crate) fn set_at(&mut self, key: impl Into<String>, data: V, ttl: Duration, now: u64) {
        self.entries.insert(key.into(), CacheEntry::new(data, now, ttl));
        self.persist_or_log();
    }

    /// Remove every entry and persist the empty store
    ///
    /// Unlike the other mutations, a failed write is returned to the caller:
    /// clearing is an explicit request that expects confirmation.
    pub fn clear(&mut self) -> Result<(), CacheError> {
        self.entries.clear();
        self.persist()
    }

    /// Remove all expired entries in one pass
    ///
    /// Persists once, and only if something was removed. Returns the number
    /// of entries removed.
    pub fn cleanup(&mut self) -> usize {
        self.cleanup_at(now_millis())
    }

    pub(crate) fn cleanup_at(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_valid_at(now));
        let removed = before - self.entries.len();

        if removed > 0 {
            tracing::debug!(namespace = %self.namespace, removed, "Removed expired cache entries");
            self.persist_or_log();
        }
        removed
    }

    /// Number of valid entries
    ///
    /// Expired entries are purged first so they are never counted.
    pub fn len(&mut self) -> usize {
        self.cleanup();
        self.entries.len()
    }

    /// Whether the cache holds no valid entries
    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    fn persist(&mut self) -> Result<(), CacheError> {
        self.backend.save(&self.entries)
    }

    fn persist_or_log(&mut self) {
        if let Err(e) = self.persist() {
            tracing::error!(
                namespace = %self.namespace,
                "Failed to save cache to {}: {}",
                self.backend.location(),
                e
            );
        }
    }
}
