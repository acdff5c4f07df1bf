//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;
use std::time::Duration;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// Both durations are fixed once a cache is built from the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// How long an entry lives after insert or update
    pub ttl: Duration,
    /// How often the background sweep removes expired entries.
    /// `Duration::ZERO` disables the sweep.
    pub cleanup_interval: Duration,
    /// When true, lookups treat expired-but-unswept entries as misses
    pub strict_reads: bool,
}

impl CacheConfig {
    /// Creates a config with the given TTL and cleanup interval.
    pub fn new(ttl: Duration, cleanup_interval: Duration) -> Self {
        Self {
            ttl,
            cleanup_interval,
            strict_reads: false,
        }
    }

    /// Enables or disables expiration checks on lookup.
    pub fn with_strict_reads(mut self, strict_reads: bool) -> Self {
        self.strict_reads = strict_reads;
        self
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Entry TTL in milliseconds (default: 300000)
    /// - `CACHE_CLEANUP_INTERVAL_MS` - Sweep frequency in milliseconds (default: 1000)
    /// - `CACHE_STRICT_READS` - `true`/`false` (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.ttl),
            cleanup_interval: env::var("CACHE_CLEANUP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.cleanup_interval),
            strict_reads: env::var("CACHE_STRICT_READS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.strict_reads),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            cleanup_interval: Duration::from_secs(1),
            strict_reads: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.cleanup_interval, Duration::from_secs(1));
        assert!(!config.strict_reads);
    }

    #[test]
    fn test_config_builder() {
        let config = CacheConfig::new(Duration::from_millis(50), Duration::from_millis(10))
            .with_strict_reads(true);
        assert_eq!(config.ttl, Duration::from_millis(50));
        assert_eq!(config.cleanup_interval, Duration::from_millis(10));
        assert!(config.strict_reads);
    }

    #[test]
    fn test_config_from_env() {
        // Only test that touches these env vars
        env::remove_var("CACHE_TTL_MS");
        env::remove_var("CACHE_CLEANUP_INTERVAL_MS");
        env::remove_var("CACHE_STRICT_READS");
        assert_eq!(CacheConfig::from_env(), CacheConfig::default());

        env::set_var("CACHE_TTL_MS", "250");
        env::set_var("CACHE_CLEANUP_INTERVAL_MS", "25");
        env::set_var("CACHE_STRICT_READS", "true");
        let config = CacheConfig::from_env();
        assert_eq!(config.ttl, Duration::from_millis(250));
        assert_eq!(config.cleanup_interval, Duration::from_millis(25));
        assert!(config.strict_reads);

        env::set_var("CACHE_TTL_MS", "not-a-number");
        assert_eq!(CacheConfig::from_env().ttl, Duration::from_secs(300));

        env::remove_var("CACHE_TTL_MS");
        env::remove_var("CACHE_CLEANUP_INTERVAL_MS");
        env::remove_var("CACHE_STRICT_READS");
    }
}
