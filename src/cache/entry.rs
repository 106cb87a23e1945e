//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body together with its insertion time.
///
/// Timestamps come from the monotonic tokio clock, the same clock the
/// reaper compares against, so wall-clock adjustments cannot delay expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Insertion (or last overwrite) time
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed between insertion and `now`.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has lived at least `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is expired.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) >= ttl
    }
}
