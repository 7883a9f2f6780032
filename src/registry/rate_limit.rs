//! Outbound request pacing
//!
//! Issues permits one caller at a time, spaced by a fixed minimum interval
//! measured between the instants permits are actually granted.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::ConfigError;

/// Single-slot rate limiter
#[derive(Debug)]
pub struct RateLimiter {
    /// Minimum gap between two consecutive permits
    min_interval: Duration,
    /// When the last permit was granted
    last_permit: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter granting at most `permits_per_second` permits per second
    pub fn new(permits_per_second: f64) -> Result<Self, ConfigError> {
        if !permits_per_second.is_finite() || permits_per_second <= 0.0 {
            return Err(ConfigError::InvalidRate {
                rate: permits_per_second,
            });
        }

        let min_interval = Duration::try_from_secs_f64(1.0 / permits_per_second).map_err(|_| {
            ConfigError::InvalidRate {
                rate: permits_per_second,
            }
        })?;

        Ok(Self::with_interval(min_interval))
    }

    /// Create a limiter with an explicit minimum interval
    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_permit: Mutex::new(None),
        }
    }

    /// Minimum gap between permits
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a permit may be issued, then take it
    ///
    /// The lock is held across the sleep, so concurrent callers queue behind
    /// each other. The grant instant is recorded after the sleep. Returns how
    /// long the caller was suspended.
    pub async fn wait_if_needed(&self) -> Duration {
        let mut last_permit = self.last_permit.lock().await;

        let mut waited = Duration::ZERO;
        if let Some(last) = *last_permit {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                waited = self.min_interval - elapsed;
                tracing::debug!("Rate limit: waiting {}ms", waited.as_millis());
                tokio::time::sleep(waited).await;
            }
        }

        *last_permit = Some(Instant::now());
        waited
    }
}
