//! Startup-time choice between the primary cache and the disk fallback.

use super::{CacheError, CachePort, FileCache, RedisCache};
use catalog_config::{CacheConfig, RedisConfig};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Default bound on the primary's startup probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Returns `primary` if it answers a ping within `probe_timeout`, otherwise
/// a [`FileCache`] rooted at `fallback_dir`.
///
/// Only a failure to create the fallback directory is an error. The choice
/// holds for the life of the process.
pub async fn select_backend(
    primary: Arc<dyn CachePort>,
    probe_timeout: Duration,
    fallback_dir: &Path,
) -> Result<Arc<dyn CachePort>, CacheError> {
    match tokio::time::timeout(probe_timeout, primary.ping()).await {
        Ok(Ok(())) => {
            info!(backend = primary.backend(), "Primary cache reachable");
            return Ok(primary);
        }
        Ok(Err(e)) => {
            warn!(backend = primary.backend(), error = %e, "Primary cache ping failed");
        }
        Err(_) => {
            warn!(
                backend = primary.backend(),
                timeout_ms = u64::try_from(probe_timeout.as_millis()).unwrap_or(u64::MAX),
                "Primary cache ping timed out"
            );
        }
    }

    open_fallback(fallback_dir).await
}

/// Builds the cache backend described by configuration.
///
/// With Redis disabled the probe is skipped and the disk cache is used directly.
pub async fn select_cache(
    redis: &RedisConfig,
    cache: &CacheConfig,
) -> Result<Arc<dyn CachePort>, CacheError> {
    let fallback_dir = Path::new(&cache.directory);

    if !redis.enabled {
        info!("Redis disabled by configuration");
        return open_fallback(fallback_dir).await;
    }

    match RedisCache::from_config(redis) {
        Ok(primary) => select_backend(Arc::new(primary), redis.probe_timeout(), fallback_dir).await,
        Err(e) => {
            warn!(error = %e, "Invalid Redis configuration");
            open_fallback(fallback_dir).await
        }
    }
}

async fn open_fallback(directory: &Path) -> Result<Arc<dyn CachePort>, CacheError> {
    let cache = FileCache::open(directory).await?;
    info!(directory = %directory.display(), "Using file cache");
    Ok(Arc::new(cache))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MockCachePort;
    use async_trait::async_trait;

    /// Primary whose ping never completes.
    struct HangingCache;

    #[async_trait]
    impl CachePort for HangingCache {
        async fn get(&self, key: &str) -> Result<String, CacheError> {
            Err(CacheError::NotFound(key.to_string()))
        }

        async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
            Ok(())
        }

        async fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Ok(())
        }

        async fn exists(&self, _key: &str) -> Result<bool, CacheError> {
            Ok(false)
        }

        async fn ping(&self) -> Result<(), CacheError> {
            std::future::pending().await
        }

        fn backend(&self) -> &'static str {
            "hanging"
        }
    }

    #[tokio::test]
    async fn test_healthy_primary_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("fallback");
        let mut primary = MockCachePort::new();
        primary.expect_ping().times(1).returning(|| Ok(()));
        primary.expect_backend().return_const("mock");

        let selected = select_backend(Arc::new(primary), DEFAULT_PROBE_TIMEOUT, &fallback)
            .await
            .unwrap();

        assert_eq!(selected.backend(), "mock");
        assert!(!fallback.exists());
    }

    #[tokio::test]
    async fn test_hanging_primary_falls_back_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("fallback");

        let started = std::time::Instant::now();
        let selected = select_backend(Arc::new(HangingCache), Duration::from_millis(50), &fallback)
            .await
            .unwrap();

        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(selected.backend(), "file");
        assert!(fallback.is_dir());
        selected.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_failing_primary_falls_back_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut primary = MockCachePort::new();
        primary
            .expect_ping()
            .returning(|| Err(CacheError::Backend("connection refused".to_string())));
        primary.expect_backend().return_const("mock");

        let selected = select_backend(Arc::new(primary), DEFAULT_PROBE_TIMEOUT, dir.path())
            .await
            .unwrap();
        assert_eq!(selected.backend(), "file");
    }

    #[tokio::test]
    async fn test_fallback_directory_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let result =
            select_backend(Arc::new(HangingCache), Duration::from_millis(10), &blocker.join("cache"))
                .await;
        assert!(matches!(result, Err(CacheError::Io(_))));
    }

    #[tokio::test]
    async fn test_disabled_redis_skips_probe() {
        let dir = tempfile::tempdir().unwrap();
        let redis = RedisConfig {
            enabled: false,
            ..RedisConfig::default()
        };
        let cache = CacheConfig {
            directory: dir.path().join("c").to_string_lossy().into_owned(),
            ..CacheConfig::default()
        };

        let selected = select_cache(&redis, &cache).await.unwrap();
        assert_eq!(selected.backend(), "file");
    }
}
