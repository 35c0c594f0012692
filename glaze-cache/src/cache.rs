//! In-memory bounded cache for generated assets.
//!
//! Eviction is strict insertion order (FIFO): once the cache is at capacity,
//! inserting a new key removes the oldest-inserted entry. Lookups do not
//! refresh an entry's position — retention is access-independent by contract,
//! so callers can rely on predictable eviction regardless of read traffic.
//! Do not "upgrade" this to LRU.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use glaze_core::types::GeneratedAsset;
use glaze_core::DEFAULT_CACHE_CAPACITY;

/// Cache entry with its insertion sequence number.
#[derive(Clone)]
struct CacheEntry {
    asset: GeneratedAsset,
    inserted_at: u64,
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_CAPACITY,
        }
    }
}

struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    // Monotonic insertion counter; only advanced under the write lock.
    next_seq: u64,
}

/// In-memory cache for generated assets.
///
/// Thread-safe; keys are opaque strings and never normalized or re-derived.
/// Memory-only: contents are lost on restart.
pub struct AssetCache {
    inner: RwLock<CacheInner>,
    config: CacheConfig,
}

impl AssetCache {
    /// Creates a new cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            inner: RwLock::new(CacheInner {
                entries: HashMap::with_capacity(config.max_entries),
                next_seq: 0,
            }),
            config,
        }
    }

    /// Creates a cache holding at most `max_entries` assets.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self::with_config(CacheConfig { max_entries })
    }

    /// Gets a cached asset by key.
    ///
    /// A hit does not affect eviction order.
    pub fn get(&self, key: &str) -> Option<GeneratedAsset> {
        let inner = self.inner.read();
        inner.entries.get(key).map(|e| e.asset.clone())
    }

    /// Returns true if the key is resident.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.read().entries.contains_key(key)
    }

    /// Inserts an asset under the given key, evicting the oldest-inserted
    /// entry if the capacity bound would be exceeded.
    ///
    /// Inserting an existing key overwrites its payload. The entry inserted
    /// by this call is never the one evicted by it.
    pub fn insert(&self, key: &str, asset: GeneratedAsset) {
        let mut inner = self.inner.write();

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(
            key.to_string(),
            CacheEntry {
                asset,
                inserted_at: seq,
            },
        );

        // The new entry carries the largest sequence number, so the minimum
        // can only ever select an older entry.
        while inner.entries.len() > self.config.max_entries {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, e)| e.inserted_at)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(k) => {
                    inner.entries.remove(&k);
                }
                None => break,
            }
        }
    }

    /// Removes a cached entry.
    pub fn remove(&self, key: &str) {
        self.inner.write().entries.remove(key);
    }

    /// Clears all cached entries.
    pub fn clear(&self) {
        self.inner.write().entries.clear();
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Returns the configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.config.max_entries
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.read();
        CacheStats {
            total_entries: inner.entries.len(),
            capacity: self.config.max_entries,
        }
    }
}

impl Default for AssetCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Debug, Serialize)]
pub struct CacheStats {
    /// Resident entry count.
    pub total_entries: usize,
    /// Configured capacity bound.
    pub capacity: usize,
}
