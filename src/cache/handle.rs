//! TTL Cache Handle
//!
//! Owns a [`CacheStore`] behind a single exclusive lock together with the
//! background sweep that expires its entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::tasks::spawn_cleanup_task;

// == TTL Cache ==
/// An in-process key-value cache with a fixed TTL and a background sweep.
///
/// Every operation and every sweep serialize on one lock, so no caller ever
/// observes a partially updated map. Share a cache between tasks by wrapping
/// it in an `Arc`.
///
/// # Example
/// ```ignore
/// let cache = TtlCache::new(Duration::from_secs(60), Duration::from_secs(1));
/// cache.insert_one("user:1", "alice".to_string()).await?;
/// let entry = cache.get_one("user:1").await?;
/// cache.stop().await;
/// ```
pub struct TtlCache<V> {
    store: Arc<Mutex<CacheStore<V>>>,
    ttl: Duration,
    cleanup_interval: Duration,
    cancel: CancellationToken,
    /// `None` once the sweep has been stopped and joined
    cleanup_handle: Mutex<Option<JoinHandle<()>>>,
}

impl<V> TtlCache<V>
where
    V: Send + 'static,
{
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// A zero `cleanup_interval` never sweeps; a zero `ttl` makes every
    /// entry eligible for the next sweep.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn new(ttl: Duration, cleanup_interval: Duration) -> Self {
        Self::from_config(&CacheConfig::new(ttl, cleanup_interval))
    }

    /// Creates a cache from a [`CacheConfig`].
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn from_config(config: &CacheConfig) -> Self {
        if config.ttl.is_zero() {
            warn!("Cache created with zero TTL, entries expire immediately");
        }

        let store = Arc::new(Mutex::new(
            CacheStore::new(config.ttl).with_strict_reads(config.strict_reads),
        ));
        let cancel = CancellationToken::new();
        let handle = spawn_cleanup_task(store.clone(), config.cleanup_interval, cancel.clone());

        debug!(
            ttl = ?config.ttl,
            cleanup_interval = ?config.cleanup_interval,
            strict_reads = config.strict_reads,
            "TTL cache created"
        );

        Self {
            store,
            ttl: config.ttl,
            cleanup_interval: config.cleanup_interval,
            cancel,
            cleanup_handle: Mutex::new(Some(handle)),
        }
    }
}

impl<V> TtlCache<V> {
    /// The TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The interval between background sweeps.
    pub fn cleanup_interval(&self) -> Duration {
        self.cleanup_interval
    }

    // == Insert One ==
    /// Inserts `value` under `key` if the key is not present.
    ///
    /// Returns `AlreadyExists` and leaves the stored entry untouched otherwise.
    /// With strict reads an expired entry counts as absent and is replaced.
    pub async fn insert_one(&self, key: impl Into<String>, value: V) -> Result<()> {
        self.store.lock().await.insert(key.into(), value)
    }

    // == Update One ==
    /// Replaces the value under `key` and restarts its TTL.
    ///
    /// Returns `NotFound` without creating an entry if the key is absent, or
    /// expired with strict reads.
    pub async fn update_one(&self, key: &str, value: V) -> Result<()> {
        self.store.lock().await.update(key, value)
    }

    // == Delete One ==
    /// Removes `key` if present. Deleting an absent key is a no-op.
    pub async fn delete_one(&self, key: &str) {
        self.store.lock().await.delete(key);
    }

    // == Get Size ==
    /// Returns the entry count, including expired entries not yet swept.
    pub async fn get_size(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    /// Whether the sweep task is still alive.
    pub async fn is_running(&self) -> bool {
        self.cleanup_handle
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Stop ==
    /// Stops the sweep task and waits until it has exited.
    ///
    /// Safe to call any number of times. Concurrent callers all return only
    /// after the task is gone. The cache stays usable afterwards, but expired
    /// entries are no longer removed.
    pub async fn stop(&self) {
        self.cancel.cancel();

        let mut slot = self.cleanup_handle.lock().await;
        let Some(handle) = slot.take() else {
            return;
        };

        if let Err(e) = handle.await {
            warn!("TTL cleanup task ended abnormally: {}", e);
        }
        info!("TTL cache stopped");
    }
}

impl<V: Clone> TtlCache<V> {
    // == Get One ==
    /// Returns a copy of the entry stored under `key`.
    ///
    /// Returns `NotFound` if the key is absent or was swept. By default an
    /// expired entry the sweep has not reached yet is still returned; build
    /// the cache with `strict_reads` to treat it as missing instead.
    pub async fn get_one(&self, key: &str) -> Result<CacheEntry<V>> {
        self.store.lock().await.get(key)
    }
}

impl<V> Drop for TtlCache<V> {
    fn drop(&mut self) {
        // Owner never called stop(); end the sweep with the handle
        self.cancel.cancel();
    }
}
