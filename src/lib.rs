//! TTL Cache - An in-process key-value cache
//!
//! Stores opaque values under string keys, expires them after a fixed TTL and
//! reclaims expired entries with a background sweep task.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheEntry, CacheStats, TtlCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
