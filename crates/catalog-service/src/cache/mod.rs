//! Caching infrastructure for the service layer.
//!
//! The entity services talk to a string-oriented [`CachePort`]. Two backends
//! implement it: [`RedisCache`] and the on-disk [`FileCache`]. The
//! [`select_backend`] function picks one at startup.

mod cache_ext;
pub mod cache_keys;
mod cache_port;
mod file_cache;
mod redis_cache;
mod selector;

pub use cache_ext::CacheExt;
pub use cache_port::{CacheError, CachePort};
#[cfg(test)]
pub use cache_port::MockCachePort;
pub use file_cache::FileCache;
pub use redis_cache::RedisCache;
pub use selector::{select_backend, select_cache, DEFAULT_PROBE_TIMEOUT};

use std::time::Duration;

/// Lifetime of entries written by cache-aside reads (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
