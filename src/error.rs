//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Insert was attempted for a key that is already present
    #[error("Key already exists: {0}")]
    AlreadyExists(String),

    /// Key is absent (never inserted, deleted or swept)
    #[error("Key not found: {0}")]
    NotFound(String),
}

impl CacheError {
    /// Returns the key the error refers to.
    pub fn key(&self) -> &str {
        match self {
            CacheError::AlreadyExists(key) | CacheError::NotFound(key) => key,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
