//! Typed, failure-tolerant helpers over [`CachePort`].

use super::CachePort;
use async_trait::async_trait;
use catalog_core::CatalogResult;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Extension trait with typed methods for the entity services.
///
/// None of these methods fail: a cache that misbehaves degrades to a miss
/// or a skipped write, and the problem is logged.
#[async_trait]
pub trait CacheExt: CachePort {
    /// Reads and decodes a cached value. Any failure is a miss.
    async fn get_json<T: DeserializeOwned + Send>(&self, key: &str) -> Option<T> {
        let raw = match self.get(key).await {
            Ok(raw) => raw,
            Err(e) if e.is_miss() => {
                debug!(key, backend = self.backend(), "Cache miss");
                return None;
            }
            Err(e) => {
                warn!(key, backend = self.backend(), error = %e, "Cache read failed");
                return None;
            }
        };

        if raw.is_empty() {
            debug!(key, "Cache miss (empty value)");
            return None;
        }

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, backend = self.backend(), "Cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "Discarding undecodable cache entry");
                None
            }
        }
    }

    /// Encodes and stores a value. Failures are logged and dropped.
    async fn set_json<T: Serialize + Sync>(&self, key: &str, value: &T, ttl: Duration) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(key, error = %e, "Failed to encode value for cache");
                return;
            }
        };

        match self.set(key, &encoded, ttl).await {
            Ok(()) => debug!(key, ttl_secs = ttl.as_secs(), "Cached value"),
            Err(e) => warn!(key, backend = self.backend(), error = %e, "Failed to populate cache"),
        }
    }

    /// Deletes every key. Failures are logged and the remaining keys are still tried.
    async fn invalidate(&self, keys: &[String]) {
        for key in keys {
            match self.delete(key).await {
                Ok(()) => debug!(key = %key, "Invalidated cache key"),
                Err(e) => {
                    warn!(key = %key, backend = self.backend(), error = %e, "Failed to invalidate cache key");
                }
            }
        }
    }

    /// Returns the cached value or loads, caches and returns it.
    ///
    /// Loader errors are returned untouched and leave the cache alone.
    async fn get_or_load<T, F, Fut>(&self, key: &str, ttl: Duration, loader: F) -> CatalogResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: std::future::Future<Output = CatalogResult<T>> + Send,
    {
        if let Some(cached) = self.get_json::<T>(key).await {
            return Ok(cached);
        }

        let value = loader().await?;
        self.set_json(key, &value, ttl).await;
        Ok(value)
    }
}

impl<C: CachePort + ?Sized> CacheExt for C {}
