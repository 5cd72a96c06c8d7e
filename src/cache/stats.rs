//! Cache Statistics Module
//!
//! Tracks hits, misses and evictions for one cache instance.

use serde::Serialize;

// == Cache Stats ==
/// Counters owned by a cache instance.
///
/// Counters only grow until [`CacheStats::reset`]; resetting never touches
/// the cache contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of lookups that found their key
    pub hits: u64,
    /// Number of lookups that did not
    pub misses: u64,
    /// Number of entries evicted due to LRU policy
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lookups (hits + misses).
    pub fn total_accesses(&self) -> u64 {
        self.hits + self.misses
    }

    // == Hit Ratio ==
    /// Fraction of lookups that hit, in `[0, 1]`.
    ///
    /// Defined as 0.0 when no lookups have been made.
    pub fn hit_ratio(&self) -> f64 {
        ratio(self.hits, self.total_accesses())
    }

    /// Fraction of lookups that missed, in `[0, 1]`. 0.0 with no lookups.
    pub fn miss_ratio(&self) -> f64 {
        ratio(self.misses, self.total_accesses())
    }

    /// [`hit_ratio`](Self::hit_ratio) on the 0-100 scale used in reports.
    pub fn hit_percentage(&self) -> f64 {
        self.hit_ratio() * 100.0
    }

    /// [`miss_ratio`](Self::miss_ratio) on the 0-100 scale.
    pub fn miss_percentage(&self) -> f64 {
        self.miss_ratio() * 100.0
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Reset ==
    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
