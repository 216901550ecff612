//! # memcache
//!
//! Bounded, thread-safe, in-memory LRU cache with hit/miss accounting.
//!
//! ## Architecture
//! - **HashMap**: AHash lookup index from key to list slot (O(1))
//! - **LRU List**: Doubly-linked list over a slot arena for recency (O(1))
//! - **Counters**: Atomic get/hit counters reported through [`CacheStatus`]
//!
//! A capacity of 0 means the cache never evicts. Otherwise inserting a new
//! key into a full cache evicts the least recently used entry and hands it to
//! the optional [`EvictCallback`]. Explicit deletes never call it.
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use memcache::MemCache;
//!
//! let evicted = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&evicted);
//! let cache = MemCache::<i32>::new(1, Some(Arc::new(move |_key: String, _value: i32| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! })))?;
//!
//! cache.put("key1", 2);
//! cache.put("key", 1);
//!
//! assert_eq!(cache.get("key"), Some(1));
//! assert_eq!(evicted.load(Ordering::SeqCst), 1);
//! # Ok::<(), memcache::Error>(())
//! ```
//!
//! ```
//! use memcache::MemCache;
//!
//! let cache = MemCache::new(0, None)?;
//! cache.put("key", 1);
//!
//! assert_eq!(cache.get("key"), Some(1));
//! assert_eq!(cache.status().to_string(), "{1 1 0 1}");
//! # Ok::<(), memcache::Error>(())
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod lru;
mod stats;

pub use cache::{Cache, MemCache};
pub use config::{CacheConfig, EvictCallback};
pub use error::{Error, Result, ERR_MAX_SIZE};
pub use stats::CacheStatus;
