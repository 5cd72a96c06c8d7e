//! Simulation Runner
//!
//! Replays a key stream against one cache, sampling cumulative hits and the
//! miss percentage at regular checkpoints.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheStats, CacheStore, Key};
use crate::simulation::access;

/// Target number of progression samples per run.
pub const CHECKPOINTS: usize = 10;

/// Requests between two checkpoints for a stream of `n` keys.
pub fn checkpoint_interval(n: usize) -> usize {
    (n / CHECKPOINTS).max(1)
}

// == Simulation Outcome ==
/// Result of replaying one stream.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// Wall time spent replaying the stream
    pub elapsed: Duration,
    /// Counters at the end of the run
    pub stats: CacheStats,
    /// Cumulative hits at each checkpoint
    pub hits_over_time: Vec<u64>,
    /// Cumulative miss percentage (0-100) at each checkpoint
    pub miss_ratio_over_time: Vec<f64>,
}

impl SimulationOutcome {
    /// Final hit ratio on the 0-100 scale.
    pub fn hit_ratio(&self) -> f64 {
        self.stats.hit_percentage()
    }
}

// == Run Simulation ==
/// Resets the cache's counters and replays `keys` through it.
///
/// Each key is looked up; a miss stores `key * 10`. After every
/// [`checkpoint_interval`] requests, and after the last request, the running
/// hit count and miss percentage are recorded. Cache contents from earlier
/// activity are kept, so a warm cache starts warm.
pub fn run_simulation(cache: &mut CacheStore, keys: &[Key]) -> SimulationOutcome {
    let interval = checkpoint_interval(keys.len());
    let mut hits_over_time = Vec::with_capacity(CHECKPOINTS + 1);
    let mut miss_ratio_over_time = Vec::with_capacity(CHECKPOINTS + 1);

    cache.reset_stats();
    let start = Instant::now();

    for (i, &key) in keys.iter().enumerate() {
        access(cache, key);

        let position = i + 1;
        if position % interval == 0 || position == keys.len() {
            let stats = cache.stats();
            hits_over_time.push(stats.hits);
            miss_ratio_over_time.push(stats.miss_percentage());
        }
    }

    let elapsed = start.elapsed();
    let stats = cache.stats();
    debug!(
        requests = keys.len(),
        hits = stats.hits,
        misses = stats.misses,
        elapsed_us = elapsed.as_micros() as u64,
        "simulation replay finished"
    );

    SimulationOutcome {
        elapsed,
        stats,
        hits_over_time,
        miss_ratio_over_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_interval() {
        assert_eq!(checkpoint_interval(0), 1);
        assert_eq!(checkpoint_interval(5), 1);
        assert_eq!(checkpoint_interval(10), 1);
        assert_eq!(checkpoint_interval(1000), 100);
        assert_eq!(checkpoint_interval(1005), 100);
    }

    #[test]
    fn test_simulation_counts() {
        let mut cache = CacheStore::new(10).unwrap();
        let keys = [1, 2, 1, 3, 2, 1, 4, 4, 5, 1];

        let outcome = run_simulation(&mut cache, &keys);

        // Misses: first sight of 1, 2, 3, 4, 5
        assert_eq!(outcome.stats.misses, 5);
        assert_eq!(outcome.stats.hits, 5);
        assert!((outcome.hit_ratio() - 50.0).abs() < 1e-9);
        assert_eq!(cache.peek(4), Some(40));
    }

    #[test]
    fn test_simulation_checkpoints_every_tenth() {
        let mut cache = CacheStore::new(5).unwrap();
        let keys: Vec<Key> = (0..1000).map(|i| i % 3).collect();

        let outcome = run_simulation(&mut cache, &keys);

        assert_eq!(outcome.hits_over_time.len(), 10);
        assert_eq!(outcome.miss_ratio_over_time.len(), 10);
        // Only the first three lookups miss
        assert_eq!(outcome.hits_over_time[0], 97);
        assert_eq!(*outcome.hits_over_time.last().unwrap(), 997);
        assert!((outcome.miss_ratio_over_time[0] - 3.0).abs() < 1e-9);
        assert!(outcome
            .hits_over_time
            .windows(2)
            .all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_simulation_records_final_position() {
        let mut cache = CacheStore::new(5).unwrap();
        let keys: Vec<Key> = (0..1005).map(|i| i % 4).collect();

        let outcome = run_simulation(&mut cache, &keys);

        assert_eq!(outcome.hits_over_time.len(), 11);
        assert_eq!(
            *outcome.hits_over_time.last().unwrap(),
            outcome.stats.hits
        );
    }

    #[test]
    fn test_simulation_short_stream() {
        let mut cache = CacheStore::new(1).unwrap();

        let outcome = run_simulation(&mut cache, &[1, 1, 2]);

        assert_eq!(outcome.hits_over_time, vec![0, 1, 1]);
        assert_eq!(outcome.miss_ratio_over_time.len(), 3);
        assert!((outcome.miss_ratio_over_time[0] - 100.0).abs() < 1e-9);
        assert!((outcome.miss_ratio_over_time[1] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_simulation_empty_stream() {
        let mut cache = CacheStore::new(3).unwrap();

        let outcome = run_simulation(&mut cache, &[]);

        assert!(outcome.hits_over_time.is_empty());
        assert!(outcome.miss_ratio_over_time.is_empty());
        assert_eq!(outcome.hit_ratio(), 0.0);
    }

    #[test]
    fn test_simulation_resets_previous_stats() {
        let mut cache = CacheStore::new(3).unwrap();
        cache.put(1, 10);
        cache.get(1);
        cache.get(2);

        let outcome = run_simulation(&mut cache, &[1]);

        // Warm entry hits, earlier counters are gone
        assert_eq!(outcome.stats.hits, 1);
        assert_eq!(outcome.stats.misses, 0);
    }
}
