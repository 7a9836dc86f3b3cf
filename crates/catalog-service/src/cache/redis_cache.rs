//! Redis-backed cache.

use super::{CacheError, CachePort};
use async_trait::async_trait;
use catalog_config::RedisConfig;
use deadpool_redis::{redis::AsyncCommands, Config, Pool, Runtime};
use std::time::Duration;
use tracing::debug;

/// Redis-backed cache over a deadpool connection pool.
#[derive(Clone)]
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    /// Wraps an existing pool.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Builds the pool from configuration. No connection is opened yet.
    pub fn from_config(config: &RedisConfig) -> Result<Self, CacheError> {
        let mut pool_config = Config::from_url(config.url.clone());
        pool_config.pool = Some(deadpool_redis::PoolConfig::new(config.pool_size));
        let pool = pool_config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CacheError::Backend(format!("failed to create Redis pool: {e}")))?;
        Ok(Self { pool })
    }

    async fn conn(&self) -> Result<deadpool_redis::Connection, CacheError> {
        Ok(self.pool.get().await?)
    }
}

#[async_trait]
impl CachePort for RedisCache {
    async fn get(&self, key: &str) -> Result<String, CacheError> {
        let mut conn = self.conn().await?;
        let value: Option<String> = conn.get(key).await?;
        value.ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.conn().await?;
        if ttl.is_zero() {
            conn.set::<_, _, ()>(key, value).await?;
            debug!(key, "Redis SET without expiry");
        } else {
            // PX keeps sub-second lifetimes exact
            let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
            conn.pset_ex::<_, _, ()>(key, value, millis).await?;
            debug!(key, ttl_ms = millis, "Redis SET");
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn().await?;
        let deleted: i64 = conn.del(key).await?;
        debug!(key, deleted, "Redis DEL");
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.conn().await?;
        let exists: bool = conn.exists(key).await?;
        Ok(exists)
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.conn().await?;
        let _: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.pool.status();
        f.debug_struct("RedisCache")
            .field("size", &status.size)
            .field("available", &status.available)
            .finish()
    }
}
