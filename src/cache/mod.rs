//! Cache Module
//!
//! Fixed-capacity LRU cache engine with hit/miss/eviction counters.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruList;
pub use stats::CacheStats;
pub use store::CacheStore;

/// Cache key type.
pub type Key = i64;

/// Cache value type.
pub type Value = i64;
