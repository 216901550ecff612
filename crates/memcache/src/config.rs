//! Cache configuration

use std::fmt;
use std::sync::Arc;

/// Callback invoked when an entry is evicted to make room for a new one.
///
/// Receives ownership of the evicted key and value. It runs synchronously
/// while the cache's write lock is held, so it must not call back into the
/// cache that invoked it (that deadlocks) and should return quickly.
/// Explicit [`delete`](crate::MemCache::delete) never triggers it.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use memcache::EvictCallback;
///
/// let callback: EvictCallback<i32> = Arc::new(|key: String, value: i32| {
///     println!("evicted {}={}", key, value);
/// });
/// # let _ = callback;
/// ```
pub type EvictCallback<V> = Arc<dyn Fn(String, V) + Send + Sync>;

/// Construction parameters for a [`MemCache`](crate::MemCache)
pub struct CacheConfig<V> {
    /// Maximum number of entries (0 means unbounded, negative is rejected)
    pub max_item_size: isize,
    /// Optional eviction hook
    pub evict_callback: Option<EvictCallback<V>>,
}

impl<V> fmt::Debug for CacheConfig<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfig")
            .field("max_item_size", &self.max_item_size)
            .field("evict_callback", &self.evict_callback.is_some())
            .finish()
    }
}

impl<V> Clone for CacheConfig<V> {
    fn clone(&self) -> Self {
        Self {
            max_item_size: self.max_item_size,
            evict_callback: self.evict_callback.clone(),
        }
    }
}

impl<V> Default for CacheConfig<V> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<V> CacheConfig<V> {
    /// Create a configuration capped at `max_item_size` entries
    pub fn new(max_item_size: isize) -> Self {
        Self {
            max_item_size,
            evict_callback: None,
        }
    }

    /// Create a configuration with no capacity limit
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Set the eviction callback
    pub fn with_evict_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(String, V) + Send + Sync + 'static,
    {
        self.evict_callback = Some(Arc::new(callback));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config: CacheConfig<u32> = CacheConfig::default();
        assert_eq!(config.max_item_size, 0);
        assert!(config.evict_callback.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config: CacheConfig<u32> = CacheConfig::new(8).with_evict_callback(|_, _| {});
        assert_eq!(config.max_item_size, 8);
        assert!(config.evict_callback.is_some());

        let debug = format!("{:?}", config.clone());
        assert_eq!(debug, "CacheConfig { max_item_size: 8, evict_callback: true }");
    }
}
