//! The cache contract shared by every backend.

use async_trait::async_trait;
use catalog_core::CatalogError;
use std::time::Duration;
use thiserror::Error;

/// Failures reported by a cache backend.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The key has no entry.
    #[error("cache key not found: {0}")]
    NotFound(String),

    /// The entry's lifetime has passed.
    #[error("cache key expired: {0}")]
    Expired(String),

    /// The backend could not serve the request.
    #[error("cache backend error: {0}")]
    Backend(String),

    /// Filesystem failure in the disk backend.
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be encoded or decoded.
    #[error("cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CacheError {
    /// Returns true when the error only means "no usable entry".
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Expired(_))
    }
}

impl From<deadpool_redis::redis::RedisError> for CacheError {
    fn from(err: deadpool_redis::redis::RedisError) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<deadpool_redis::PoolError> for CacheError {
    fn from(err: deadpool_redis::PoolError) -> Self {
        Self::Backend(format!("failed to get Redis connection: {err}"))
    }
}

impl From<CacheError> for CatalogError {
    fn from(err: CacheError) -> Self {
        Self::Cache(err.to_string())
    }
}

/// Key/value cache used by the entity services.
///
/// Values are opaque strings; encoding lives with the callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CachePort: Send + Sync {
    /// Returns the value for `key`, failing with a miss if it is absent or expired.
    async fn get(&self, key: &str) -> Result<String, CacheError>;

    /// Stores `value` under `key`. A zero `ttl` never expires.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Removes `key`. Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Returns whether a live entry exists for `key`.
    async fn exists(&self, key: &str) -> Result<bool, CacheError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), CacheError>;

    /// Short backend name for diagnostics.
    fn backend(&self) -> &'static str;
}
