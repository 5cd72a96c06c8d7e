//! Cache Entry Module
//!
//! Defines the resident key/value pair and its slot in the recency list.

use serde::Serialize;

use crate::cache::{Key, Value};

// == Cache Entry ==
/// A single resident key/value pair.
///
/// Serializes as `{"key": .., "value": ..}`, the shape used by state listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheEntry {
    /// The cache key, unique within one instance
    pub key: Key,
    /// The stored value
    pub value: Value,
}

impl CacheEntry {
    // == Constructor ==
    pub fn new(key: Key, value: Value) -> Self {
        Self { key, value }
    }
}

impl From<(Key, Value)> for CacheEntry {
    fn from((key, value): (Key, Value)) -> Self {
        Self::new(key, value)
    }
}
