//! Thread-safe in-memory key-value cache with per-entry TTL.
//!
//! [`MemoryCache`] stores raw bytes and offers JSON helpers for structured
//! values, so callers can memoize computed results (traversal orders,
//! rendered payloads) without an external cache service. Expired entries are
//! treated as absent on read and purged lazily; [`MemoryCache::purge_expired`]
//! forces a sweep. All accessors take `&self`.

use std::collections::HashMap;
use std::string::FromUtf8Error;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors returned by the cache accessors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// A value could not be serialized to or deserialized from JSON.
    #[error("cache serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// A stored value was not valid UTF-8.
    #[error("cached value is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Configuration for [`MemoryCache`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Time-to-live applied when `set` is called without one, in seconds.
    /// `None` means entries without an explicit TTL never expire.
    pub default_ttl_secs: Option<u64>,
}

#[derive(Debug)]
struct Entry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

/// In-memory key-value cache with optional per-entry expiry.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
    default_ttl: Option<Duration>,
}

impl MemoryCache {
    /// Creates an empty cache with no default TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache configured from [`CacheConfig`].
    #[must_use]
    pub fn with_config(config: &CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl: config.default_ttl_secs.map(Duration::from_secs),
        }
    }

    /// Stores raw bytes under `key`.
    ///
    /// `ttl` overrides the configured default; `None` falls back to it.
    pub fn set(&self, key: impl Into<String>, value: Vec<u8>, ttl: Option<Duration>) {
        let expires_at = ttl.or(self.default_ttl).map(|ttl| Instant::now() + ttl);
        self.entries
            .write()
            .insert(key.into(), Entry { value, expires_at });
    }

    /// Serializes `value` to JSON and stores it under `key`.
    pub fn set_json<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: &T,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.set(key, bytes, ttl);
        Ok(())
    }

    /// Returns the bytes stored under `key`, or `None` on a miss or an
    /// expired entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // Entry exists but has expired: drop it.
        self.entries.write().remove(key);
        None
    }

    /// Returns the value stored under `key` as a UTF-8 string.
    pub fn get_string(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.get(key)
            .map(|bytes| String::from_utf8(bytes).map_err(CacheError::from))
            .transpose()
    }

    /// Deserializes the JSON value stored under `key`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        self.get(key)
            .map(|bytes| serde_json::from_slice(&bytes).map_err(CacheError::from))
            .transpose()
    }

    /// Removes `key`, returning true if a live entry was present.
    pub fn delete(&self, key: &str) -> bool {
        let now = Instant::now();
        self.entries
            .write()
            .remove(key)
            .is_some_and(|entry| !entry.is_expired(now))
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the number of live (unexpired) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .values()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    /// Returns true if the cache holds no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all expired entries, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();
        if removed > 0 {
            debug!(removed, "purged expired cache entries");
        }
        removed
    }
}
