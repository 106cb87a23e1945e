//! Cache Store Module
//!
//! The key-to-entry mapping with TTL bookkeeping. `CacheStore` itself is not
//! synchronised; `TtlCache` owns it behind the single store-wide lock.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage with a fixed time-to-live.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// TTL applied to every entry, fixed at construction
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
        }
    }

    // == Add ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// An existing entry is replaced outright, which restarts its TTL.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Entries past their TTL stay visible until the next purge; reading
    /// does not refresh the timestamp.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Purge Expired ==
    /// Removes every entry whose age at `now` has reached the interval.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let interval = self.interval;
        self.entries
            .retain(|_, entry| !entry.is_expired_at(now, interval));
        before - self.entries.len()
    }

    // == Interval ==
    /// The TTL applied to every entry.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
