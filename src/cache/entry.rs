//! Cache entry with wall-clock expiry

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A cached value stamped with its insertion time and TTL
///
/// Times are stored as epoch milliseconds so the snapshot stays meaningful
/// across process restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry<V> {
    /// Cached payload
    pub data: V,
    /// Insertion time (epoch milliseconds)
    pub timestamp: u64,
    /// Time to live (milliseconds)
    pub ttl: u64,
}

impl<V> CacheEntry<V> {
    /// Create an entry stamped at `timestamp`
    pub fn new(data: V, timestamp: u64, ttl: Duration) -> Self {
        Self {
            data,
            timestamp,
            ttl: duration_millis(ttl),
        }
    }

    /// Whether the entry is still valid at `now` (epoch milliseconds)
    ///
    /// An entry is valid while `now - timestamp <= ttl`. A timestamp in the
    /// future (clock stepped backwards) counts as age zero.
    pub fn is_valid_at(&self, now: u64) -> bool {
        now.saturating_sub(self.timestamp) <= self.ttl
    }

    /// TTL as a [`Duration`]
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl)
    }
}

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(duration_millis)
        .unwrap_or(0)
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
