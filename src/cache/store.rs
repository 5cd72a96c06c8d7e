//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with the LRU recency list.

use std::collections::HashMap;

use tracing::trace;

use crate::cache::{CacheEntry, CacheStats, Key, LruList, Value};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Fixed-capacity LRU cache with hit/miss instrumentation.
///
/// `get` and `put` are O(1) amortized: the map resolves a key to its slot in
/// the recency list, and the list reorders or evicts in constant time.
#[derive(Debug)]
pub struct CacheStore {
    /// Key -> slot in `lru`
    index: HashMap<Key, usize>,
    /// Resident entries ordered by recency
    lru: LruList,
    stats: CacheStats,
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] unless `capacity >= 1`.
    pub fn new(capacity: i64) -> Result<Self> {
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|&c| c > 0)
            .ok_or(CacheError::InvalidCapacity(capacity))?;

        Ok(Self::with_capacity(capacity))
    }

    fn with_capacity(capacity: usize) -> Self {
        // The arena grows lazily; only pre-size for modest capacities.
        let prealloc = capacity.min(1 << 16);
        Self {
            index: HashMap::with_capacity(prealloc),
            lru: LruList::with_capacity(prealloc),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Get ==
    /// Looks up a key, promoting it to most recently used on a hit.
    ///
    /// Counts a hit or a miss. Never evicts.
    pub fn get(&mut self, key: Key) -> Option<Value> {
        match self.index.get(&key) {
            Some(&idx) => {
                self.stats.record_hit();
                self.lru.touch(idx);
                Some(self.lru.get(idx).value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Reads a value without touching recency or counters.
    pub fn peek(&self, key: Key) -> Option<Value> {
        self.index.get(&key).map(|&idx| self.lru.get(idx).value)
    }

    // == Put ==
    /// Inserts or updates a key as most recently used.
    ///
    /// Updating a resident key never evicts. Inserting a new key into a full
    /// cache first evicts the least recently used entry, which is returned.
    /// Hit/miss counters are untouched.
    pub fn put(&mut self, key: Key, value: Value) -> Option<CacheEntry> {
        if let Some(&idx) = self.index.get(&key) {
            self.lru.get_mut(idx).value = value;
            self.lru.touch(idx);
            return None;
        }

        let evicted = if self.index.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        let idx = self.lru.push_front(CacheEntry::new(key, value));
        self.index.insert(key, idx);
        evicted
    }

    fn evict_oldest(&mut self) -> Option<CacheEntry> {
        let evicted = self.lru.pop_back()?;
        self.index.remove(&evicted.key);
        self.stats.record_eviction();
        trace!(key = evicted.key, "evicted least recently used entry");
        Some(evicted)
    }

    // == Entries ==
    /// Snapshot of every resident entry, most recently used first.
    ///
    /// Does not alter recency.
    pub fn entries(&self) -> Vec<CacheEntry> {
        self.lru.iter().copied().collect()
    }

    // == Stats ==
    /// Returns a copy of the current counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Zeroes the counters; contents are kept.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn contains(&self, key: Key) -> bool {
        self.index.contains_key(&key)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
