//! TTL Cache Handle
//!
//! Thread-safe cache handle owning the store, its lock and the reaper task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_reaper;

// == TTL Cache ==
/// In-memory byte cache whose entries expire a fixed interval after insertion.
///
/// Every operation goes through one store-wide mutex that is held only for
/// the map operation itself. A background reaper purges expired entries once
/// per interval; it is stopped by [`TtlCache::shutdown`] or, failing that,
/// when the cache is dropped.
#[derive(Debug)]
pub struct TtlCache {
    /// Shared store, also held by the reaper
    store: Arc<Mutex<CacheStore>>,
    /// Entry lifetime and sweep period
    interval: Duration,
    /// Signals the reaper to stop
    shutdown_tx: watch::Sender<bool>,
    /// Reaper task, taken on shutdown
    reaper: Option<JoinHandle<()>>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns [`PokedexError::InvalidInterval`] if `interval` is zero.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval(interval));
        }

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper(store.clone(), interval, shutdown_rx);

        Ok(Self {
            store,
            interval,
            shutdown_tx,
            reaper: Some(reaper),
        })
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its TTL.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        debug!("Cache add: {}", key);
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns the value stored under `key`, if any.
    ///
    /// An entry past its TTL may still be returned until the next sweep.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Length ==
    /// Number of entries currently held, expired-but-unswept included.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Interval ==
    /// Entry lifetime and sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    pub async fn shutdown(mut self) {
        // Send fails only if the reaper already exited
        let _ = self.shutdown_tx.send(true);

        if let Some(handle) = self.reaper.take() {
            if let Err(err) = handle.await {
                warn!("Cache reaper terminated abnormally: {}", err);
            }
        }
    }
}

impl Drop for TtlCache {
    fn drop(&mut self) {
        // Dropping `shutdown_tx` right after this closes the reaper's channel.
        let _ = self.shutdown_tx.send(true);
    }
}
