//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and a background sweep.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::TtlCache;
pub use stats::CacheStats;
pub use store::CacheStore;
