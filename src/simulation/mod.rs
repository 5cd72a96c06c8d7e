//! Simulation Module
//!
//! Replays key streams against caches.
//!
//! # Components
//! - Runner: one live cache, progression sampled at checkpoints
//! - Analyzer: one shared stream against several fresh caches

mod analyzer;
mod runner;

pub use analyzer::{analyze_performance, CapacityResult};
pub use runner::{checkpoint_interval, run_simulation, SimulationOutcome, CHECKPOINTS};

use crate::cache::{CacheStore, Key, Value};

/// Value stored for `key` when a replayed lookup misses.
pub fn value_for(key: Key) -> Value {
    key.saturating_mul(10)
}

/// Looks `key` up and fills it on a miss. Returns whether it was a hit.
pub fn access(cache: &mut CacheStore, key: Key) -> bool {
    if cache.get(key).is_some() {
        return true;
    }
    cache.put(key, value_for(key));
    false
}
