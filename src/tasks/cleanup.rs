//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// Every `cleanup_interval` the task takes the cache lock once and removes all
/// expired entries. It exits as soon as `cancel` is cancelled; a sweep already
/// holding the lock finishes first. A zero interval, or one too large to
/// schedule, disables sweeping and the task only waits for cancellation.
///
/// # Arguments
/// * `cache` - Shared reference to the cache store
/// * `cleanup_interval` - Interval between cleanup runs
/// * `cancel` - Token that stops the task
///
/// # Returns
/// A JoinHandle that completes once the task has exited.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(Mutex::new(CacheStore::<String>::new(ttl)));
/// let cancel = CancellationToken::new();
/// let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1), cancel.clone());
/// // Later, during shutdown:
/// cancel.cancel();
/// handle.await?;
/// ```
pub fn spawn_cleanup_task<V>(
    cache: Arc<Mutex<CacheStore<V>>>,
    cleanup_interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()>
where
    V: Send + 'static,
{
    tokio::spawn(async move {
        // First sweep fires one full interval after start
        let first_sweep = Instant::now().checked_add(cleanup_interval);
        let Some(first_sweep) = first_sweep.filter(|_| !cleanup_interval.is_zero()) else {
            warn!(
                "TTL cleanup disabled: cleanup interval {:?} never elapses",
                cleanup_interval
            );
            cancel.cancelled().await;
            debug!("TTL cleanup task stopped");
            return;
        };

        info!(
            "Starting TTL cleanup task with interval of {:?}",
            cleanup_interval
        );

        let mut ticker = interval_at(first_sweep, cleanup_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let removed = cache.lock().await.cleanup_expired();

                    if removed > 0 {
                        info!("TTL cleanup: removed {} expired entries", removed);
                    } else {
                        debug!("TTL cleanup: no expired entries found");
                    }
                }
            }
        }

        info!("TTL cleanup task stopped");
    })
}
