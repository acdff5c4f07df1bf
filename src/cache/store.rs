//! Cache Store Module
//!
//! The backing map and every operation on it. Not synchronized on its own;
//! [`TtlCache`](crate::cache::TtlCache) puts it behind a single lock shared
//! with the cleanup task.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Key-value storage with a fixed TTL applied to every entry.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Activity counters
    stats: CacheStats,
    /// TTL applied on insert and update
    ttl: Duration,
    /// Whether lookups check expiration themselves
    strict_reads: bool,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
            strict_reads: false,
        }
    }

    /// Makes lookups report expired-but-unswept entries as missing.
    pub fn with_strict_reads(mut self, strict_reads: bool) -> Self {
        self.strict_reads = strict_reads;
        self
    }

    /// The TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the entry under `key` if lookups should see it.
    ///
    /// With strict reads an expired entry is treated as absent everywhere,
    /// not only by `get`.
    fn live_entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries
            .get(key)
            .filter(|entry| !self.strict_reads || !entry.is_expired())
    }

    // == Insert ==
    /// Stores `value` under `key` only if the key is absent.
    ///
    /// An existing entry is left untouched and `AlreadyExists` is returned.
    /// With strict reads an expired entry counts as absent and is replaced.
    pub fn insert(&mut self, key: String, value: V) -> Result<()> {
        if self.live_entry(&key).is_some() {
            return Err(CacheError::AlreadyExists(key));
        }

        self.entries.insert(key, CacheEntry::new(value, self.ttl));
        self.stats.record_insert();
        Ok(())
    }

    // == Update ==
    /// Replaces the value under `key` and refreshes its expiration.
    ///
    /// Fails with `NotFound` when the key is absent (or expired, with strict
    /// reads); nothing is created.
    pub fn update(&mut self, key: &str, value: V) -> Result<()> {
        if self.live_entry(key).is_none() {
            return Err(CacheError::NotFound(key.to_string()));
        }

        self.entries
            .insert(key.to_string(), CacheEntry::new(value, self.ttl));
        self.stats.record_update();
        Ok(())
    }

    // == Delete ==
    /// Removes `key` if present. Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_delete();
        }
        removed
    }

    // == Cleanup Expired ==
    /// Removes every entry whose expiration time has passed.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let removed = before - self.entries.len();
        self.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the number of entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Returns a copy of the entry stored under `key`.
    ///
    /// Lookups trust map membership: an entry past its expiration that the
    /// sweep has not removed yet is still a hit, unless strict reads are on.
    /// The entry's expiration is never extended.
    pub fn get(&mut self, key: &str) -> Result<CacheEntry<V>> {
        let found = self.live_entry(key).cloned();

        match found {
            Some(entry) => {
                self.stats.record_hit();
                Ok(entry)
            }
            None => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }
}
