//! Workload Generator
//!
//! Approximate Zipf-like sampling through a power-law transform of a uniform
//! draw:
//!
//! ```text
//! rank = floor(U^(1/alpha) * key_range) + 1,   U ~ Uniform[0, 1)
//! ```
//!
//! This is not a true Zipfian distribution. `P(rank <= r) = (r / key_range)^alpha`,
//! so `alpha = 1` is uniform over the key range, `alpha < 1` piles requests
//! onto key 1 and its neighbours, and `alpha > 1` piles them onto the keys
//! next to `key_range`. Either way a larger distance from 1 means a smaller
//! hot set.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cache::Key;
use crate::workload::WorkloadParams;

/// Maps one uniform draw `u` in `[0, 1)` to a key in `1..=key_range`.
pub fn power_law_rank(u: f64, key_range: u32, alpha: f64) -> Key {
    let range = Key::from(key_range);
    let scaled = (u.powf(1.0 / alpha) * range as f64).floor() as Key;
    // powf can round up to exactly 1.0 for u close to 1
    (scaled + 1).clamp(1, range)
}

// == Workload Generator ==
/// Key stream source. Holds nothing but its random number generator.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator<R = StdRng> {
    rng: R,
}

impl WorkloadGenerator<StdRng> {
    /// Reproducible generator: the same seed yields the same stream.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> WorkloadGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a single key.
    pub fn next_key(&mut self, key_range: u32, alpha: f64) -> Key {
        let u: f64 = self.rng.gen();
        power_law_rank(u, key_range, alpha)
    }

    /// Draws `params.num_requests` keys.
    pub fn generate(&mut self, params: &WorkloadParams) -> Vec<Key> {
        (0..params.num_requests)
            .map(|_| self.next_key(params.key_range, params.alpha))
            .collect()
    }
}
