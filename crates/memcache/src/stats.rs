//! Usage counters and status snapshots

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-instance get/hit counters
#[derive(Debug, Default)]
pub(crate) struct CacheStats {
    gets: AtomicU64,
    hits: AtomicU64,
}

impl CacheStats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a lookup, found or not
    pub(crate) fn record_get(&self) {
        self.gets.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that found its key
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn gets(&self) -> u64 {
        self.gets.load(Ordering::Relaxed)
    }

    pub(crate) fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}

/// Point-in-time view of a cache's counters and size
///
/// Produced by [`Cache::status`](crate::Cache::status). The snapshot is
/// consistent across fields but stale as soon as it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStatus {
    /// Total number of `get` calls
    pub gets: u64,
    /// Number of `get` calls that found their key
    pub hits: u64,
    /// Configured capacity (0 means unbounded)
    pub max_item_size: usize,
    /// Number of entries currently resident
    pub current_size: usize,
}

impl CacheStatus {
    /// Number of `get` calls that missed
    pub fn misses(&self) -> u64 {
        self.gets.saturating_sub(self.hits)
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        if self.gets == 0 {
            0.0
        } else {
            self.hits as f64 / self.gets as f64
        }
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {}}}",
            self.gets, self.hits, self.max_item_size, self.current_size
        )
    }
}
