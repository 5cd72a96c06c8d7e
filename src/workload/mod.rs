//! Workload Module
//!
//! Synthetic request streams with a power-law key popularity skew.

mod generator;

pub use generator::{power_law_rank, WorkloadGenerator};

use crate::cache::Key;
use crate::error::{CacheError, Result};

// == Workload Parameters ==
/// Validated shape of one synthetic request stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadParams {
    /// Number of keys to generate
    pub num_requests: usize,
    /// Keys are drawn from `1..=key_range`
    pub key_range: u32,
    /// Skew exponent, finite and positive
    pub alpha: f64,
}

impl WorkloadParams {
    /// Validates raw parameters.
    ///
    /// `key_range` must lie in `1..=u32::MAX` and `alpha` must be finite and
    /// strictly positive.
    pub fn new(num_requests: usize, key_range: i64, alpha: f64) -> Result<Self> {
        let key_range = u32::try_from(key_range)
            .ok()
            .filter(|&r| r > 0)
            .ok_or_else(|| {
                CacheError::InvalidParameter(format!(
                    "key_range must be between 1 and {}, got {}",
                    u32::MAX,
                    key_range
                ))
            })?;

        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(CacheError::InvalidParameter(format!(
                "alpha must be a positive number, got {}",
                alpha
            )));
        }

        Ok(Self {
            num_requests,
            key_range,
            alpha,
        })
    }
}

// == Generate ==
/// Generates a key stream for `params`.
///
/// With `Some(seed)` the stream is reproducible; otherwise the generator is
/// seeded from OS entropy.
pub fn generate(params: &WorkloadParams, seed: Option<u64>) -> Vec<Key> {
    match seed {
        Some(seed) => WorkloadGenerator::seeded(seed).generate(params),
        None => WorkloadGenerator::from_entropy().generate(params),
    }
}
