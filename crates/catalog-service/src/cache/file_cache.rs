//! Disk-backed cache, used when Redis is unavailable.
//!
//! Each key lives in its own `<encoded key>.cache` file holding a JSON
//! record. A single reader/writer lock guards the directory: reads share it,
//! writes and expired-entry cleanup take it exclusively.

use super::{CacheError, CachePort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, warn};

const FILE_EXTENSION: &str = "cache";
const EMPTY_KEY_NAME: &str = "%empty";

/// On-disk representation of one entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheRecord {
    value: String,
    has_expiry: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

impl CacheRecord {
    fn new(value: &str, ttl: Duration) -> Self {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            // An unrepresentable deadline is treated as "never"
            chrono::Duration::from_std(ttl)
                .ok()
                .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        };

        Self {
            value: value.to_string(),
            has_expiry: expires_at.is_some(),
            expires_at,
        }
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.has_expiry && self.expires_at.map_or(true, |at| now >= at)
    }
}

/// Disk-backed cache rooted at one directory.
#[derive(Clone)]
pub struct FileCache {
    directory: PathBuf,
    lock: Arc<RwLock<()>>,
}

impl FileCache {
    /// Opens the cache, creating `directory` if needed.
    pub async fn open(directory: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let directory = directory.into();
        fs::create_dir_all(&directory).await?;
        debug!(directory = %directory.display(), "File cache ready");

        Ok(Self {
            directory,
            lock: Arc::new(RwLock::new(())),
        })
    }

    /// Directory holding the cache files.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Maps a key to its file, one-to-one and always inside the directory.
    ///
    /// ASCII letters, digits, `-` and `_` are kept; every other byte becomes
    /// `%XX`. The empty key maps to `%empty`, which no encoded key can produce.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{FILE_EXTENSION}", encode_key(key)))
    }

    async fn read_record(path: &Path) -> Result<Option<CacheRecord>, CacheError> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Ignoring corrupt cache record");
                Ok(None)
            }
        }
    }

    fn schedule_removal(&self, path: PathBuf) {
        let lock = Arc::clone(&self.lock);
        tokio::spawn(async move {
            let _guard = lock.write().await;
            // The key may have been rewritten since it was seen expired
            match Self::read_record(&path).await {
                Ok(Some(record)) if !record.is_expired(Utc::now()) => return,
                Ok(None) => return,
                _ => {}
            }
            if let Err(e) = fs::remove_file(&path).await {
                debug!(path = %path.display(), error = %e, "Expired cache file not removed");
            }
        });
    }
}

fn encode_key(key: &str) -> String {
    if key.is_empty() {
        return EMPTY_KEY_NAME.to_string();
    }

    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

#[async_trait]
impl CachePort for FileCache {
    async fn get(&self, key: &str) -> Result<String, CacheError> {
        let path = self.path_for(key);
        let record = {
            let _guard = self.lock.read().await;
            Self::read_record(&path).await?
        };

        let record = record.ok_or_else(|| CacheError::NotFound(key.to_string()))?;
        if record.is_expired(Utc::now()) {
            self.schedule_removal(path);
            return Err(CacheError::Expired(key.to_string()));
        }
        Ok(record.value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let encoded = serde_json::to_vec(&CacheRecord::new(value, ttl))?;
        let path = self.path_for(key);

        let _guard = self.lock.write().await;
        fs::write(&path, encoded).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let path = self.path_for(key);

        let _guard = self.lock.write().await;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let path = self.path_for(key);

        let _guard = self.lock.read().await;
        let record = Self::read_record(&path).await?;
        Ok(record.is_some_and(|r| !r.is_expired(Utc::now())))
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let metadata = fs::metadata(&self.directory).await?;
        if metadata.is_dir() {
            Ok(())
        } else {
            warn!(directory = %self.directory.display(), "Cache path is not a directory");
            Err(CacheError::Backend(format!(
                "{} is not a directory",
                self.directory.display()
            )))
        }
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}

impl std::fmt::Debug for FileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCache")
            .field("directory", &self.directory)
            .finish_non_exhaustive()
    }
}
