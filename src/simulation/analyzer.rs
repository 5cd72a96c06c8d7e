//! Performance Analyzer
//!
//! Replays one shared key stream against a fresh cache per candidate
//! capacity, so every capacity sees the identical request sequence.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::cache::{CacheStore, Key};
use crate::error::{CacheError, Result};
use crate::simulation::access;

// == Capacity Result ==
/// Outcome for one candidate capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityResult {
    pub cache_size: usize,
    pub hits: u64,
    pub misses: u64,
    /// Percentage, 0-100
    pub hit_ratio: f64,
    /// Mean wall time per request in milliseconds
    pub avg_access_time_ms: f64,
}

// == Analyze Performance ==
/// Benchmarks each capacity against `keys`, in the order given.
///
/// Every capacity is validated before any replay starts, so an invalid entry
/// fails the whole call with [`CacheError::InvalidCapacity`].
/// Caches are created per capacity and dropped once measured.
pub fn analyze_performance(capacities: &[i64], keys: &[Key]) -> Result<Vec<CapacityResult>> {
    if let Some(&invalid) = capacities.iter().find(|&&capacity| capacity < 1) {
        return Err(CacheError::InvalidCapacity(invalid));
    }

    capacities
        .iter()
        .map(|&capacity| CacheStore::new(capacity).map(|cache| measure(cache, keys)))
        .collect()
}

fn measure(mut cache: CacheStore, keys: &[Key]) -> CapacityResult {
    let start = Instant::now();
    for &key in keys {
        access(&mut cache, key);
    }
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;

    let stats = cache.stats();
    let avg_access_time_ms = if keys.is_empty() {
        0.0
    } else {
        total_ms / keys.len() as f64
    };
    debug!(
        capacity = cache.capacity(),
        hits = stats.hits,
        misses = stats.misses,
        "capacity benchmark finished"
    );

    CapacityResult {
        cache_size: cache.capacity(),
        hits: stats.hits,
        misses: stats.misses,
        hit_ratio: stats.hit_percentage(),
        avg_access_time_ms,
    }
}
