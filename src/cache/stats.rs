//! Cache Statistics Module
//!
//! Tracks lookup hits and misses, mutations and sweep activity.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache activity counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of successful lookups
    pub hits: u64,
    /// Number of lookups that found no entry
    pub misses: u64,
    /// Number of successful inserts
    pub inserts: u64,
    /// Number of successful updates
    pub updates: u64,
    /// Number of deletes that removed an entry
    pub deletes: u64,
    /// Number of entries removed by the background sweep
    pub expired: u64,
    /// Number of sweeps that have run
    pub sweeps: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Increments the insert counter.
    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    /// Increments the update counter.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Increments the delete counter.
    pub fn record_delete(&mut self) {
        self.deletes += 1;
    }

    // == Record Sweep ==
    /// Records one sweep run and the number of entries it removed.
    pub fn record_sweep(&mut self, removed: usize) {
        self.sweeps += 1;
        self.expired += removed as u64;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.sweeps, 0);
    }

    #[test]
    fn test_hit_rate() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();

        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_record_sweep() {
        let mut stats = CacheStats::new();
        stats.record_sweep(3);
        stats.record_sweep(0);

        assert_eq!(stats.sweeps, 2);
        assert_eq!(stats.expired, 3);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new();
        stats.record_insert();
        stats.set_total_entries(1);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["inserts"], 1);
        assert_eq!(json["total_entries"], 1);
        assert_eq!(json["expired"], 0);
    }
}
