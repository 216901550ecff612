//! MemCache: thread-safe LRU cache with eviction callbacks

use parking_lot::RwLock;
use std::fmt;
use tracing::{debug, trace, warn};

use crate::config::{CacheConfig, EvictCallback};
use crate::error::{Error, Result, ERR_MAX_SIZE};
use crate::lru::LruCache;
use crate::stats::{CacheStats, CacheStatus};

/// Common cache operations, so callers can swap implementations
pub trait Cache<V> {
    /// Insert or update a value
    fn put(&self, key: String, value: V);

    /// Look up a value, counting the access
    fn get(&self, key: &str) -> Option<V>;

    /// Remove a key if present
    fn delete(&self, key: &str);

    /// Snapshot of usage counters and size
    fn status(&self) -> CacheStatus;
}

/// In-memory LRU cache. It is safe for concurrent access.
///
/// All index mutation happens under one write lock. `get` takes the write
/// lock too, since a hit reorders the recency list.
pub struct MemCache<V> {
    /// Recency and lookup indexes
    entries: RwLock<LruCache<String, V>>,

    /// Get/hit counters
    stats: CacheStats,

    /// Invoked for capacity-driven evictions only
    on_evict: Option<EvictCallback<V>>,
}

impl<V> MemCache<V> {
    /// Create a new cache
    ///
    /// # Arguments
    /// * `max_item_size` - Maximum number of entries; 0 means no limit
    /// * `on_evict` - Called with each entry evicted to respect the limit
    ///
    /// # Returns
    /// * `Result<MemCache<V>>` - `Error::InvalidArgument` if `max_item_size` is negative
    pub fn new(max_item_size: isize, on_evict: Option<EvictCallback<V>>) -> Result<Self> {
        let capacity = usize::try_from(max_item_size).map_err(|_| {
            warn!(max_item_size, "rejected negative cache size");
            Error::InvalidArgument(ERR_MAX_SIZE)
        })?;

        debug!(capacity, evict_callback = on_evict.is_some(), "created cache");

        Ok(Self {
            entries: RwLock::new(LruCache::new(capacity)),
            stats: CacheStats::new(),
            on_evict,
        })
    }

    /// Create a new cache from a [`CacheConfig`]
    pub fn with_config(config: CacheConfig<V>) -> Result<Self> {
        Self::new(config.max_item_size, config.evict_callback)
    }

    /// Insert a value, or replace it and mark it most recently used.
    ///
    /// Inserting a new key into a full cache evicts the least recently used
    /// entry and passes it to the eviction callback.
    pub fn put(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let mut entries = self.entries.write();
        trace!(key = %key, "put");

        if let Some((old_key, old_value)) = entries.put(key, value) {
            self.evicted(old_key, old_value, entries.len());
        }
    }

    /// Remove a key. The eviction callback is not invoked.
    pub fn delete(&self, key: &str) {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            trace!(key, "deleted");
        }
    }

    /// Evict the least recently used entry, if any, through the eviction callback
    pub fn remove_oldest(&self) {
        let mut entries = self.entries.write();
        if let Some((key, value)) = entries.pop_lru() {
            self.evicted(key, value, entries.len());
        }
    }

    /// Snapshot of usage counters and size
    pub fn status(&self) -> CacheStatus {
        let entries = self.entries.read();
        CacheStatus {
            gets: self.stats.gets(),
            hits: self.stats.hits(),
            max_item_size: entries.capacity(),
            current_size: entries.len(),
        }
    }

    /// Check for a key without counting the access or touching recency
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains(key)
    }

    /// Keys from most to least recently used. Does not touch recency.
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Drop every entry without invoking the eviction callback
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Get current number of entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the configured capacity (0 means unbounded)
    pub fn capacity(&self) -> usize {
        self.entries.read().capacity()
    }

    // Runs with the write lock held by the caller.
    fn evicted(&self, key: String, value: V, remaining: usize) {
        debug!(key = %key, size = remaining, "evicted least recently used entry");
        if let Some(on_evict) = &self.on_evict {
            on_evict(key, value);
        }
    }
}

impl<V: Clone> MemCache<V> {
    /// Get a value and mark it most recently used.
    ///
    /// Every call counts as a get; calls that find the key also count as a
    /// hit. Use [`peek`](Self::peek) to inspect without side effects.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.write();
        self.stats.record_get();

        let value = entries.get(key)?.clone();
        self.stats.record_hit();
        Some(value)
    }

    /// Get a value without counting the access or touching recency
    pub fn peek(&self, key: &str) -> Option<V> {
        self.entries.read().peek(key).cloned()
    }
}

impl<V: Clone> Cache<V> for MemCache<V> {
    fn put(&self, key: String, value: V) {
        MemCache::put(self, key, value)
    }

    fn get(&self, key: &str) -> Option<V> {
        MemCache::get(self, key)
    }

    fn delete(&self, key: &str) {
        MemCache::delete(self, key)
    }

    fn status(&self) -> CacheStatus {
        MemCache::status(self)
    }
}

impl<V> fmt::Debug for MemCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemCache")
            .field("status", &self.status())
            .field("evict_callback", &self.on_evict.is_some())
            .finish()
    }
}
