//! TTL Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that purges expired entries every `interval`.
///
/// The first sweep runs one full interval after the call. Each sweep holds
/// the store lock for one pass over the entries and nothing else.
///
/// The task exits when `true` is sent on `shutdown` or when the sender is
/// dropped, so the owner can either join the returned handle or simply drop
/// its sender.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(interval)));
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let handle = spawn_reaper(store.clone(), interval, shutdown_rx);
/// // Later:
/// let _ = shutdown_tx.send(true);
/// handle.await?;
/// ```
pub fn spawn_reaper(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let mut ticker = interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.lock().await;
                        guard.purge_expired(Instant::now())
                    };

                    if removed > 0 {
                        info!("Cache sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Cache sweep: no expired entries found");
                    }
                }
                changed = shutdown.changed() => {
                    // Err means the owning cache was dropped
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Cache reaper stopped");
    })
}
