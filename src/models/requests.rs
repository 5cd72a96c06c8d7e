//! Request DTOs for the cache simulator API
//!
//! Every field is optional at the wire level so that an absent field is
//! reported as a missing parameter rather than a generic JSON rejection.
//! Each request validates itself into typed parameters.

use serde::Deserialize;

use crate::cache::{Key, Value};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::workload::WorkloadParams;

/// Request body for POST /api/create_cache
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCacheRequest {
    /// Capacity of the new cache; must be positive
    pub capacity: Option<i64>,
}

impl CreateCacheRequest {
    /// Returns the requested capacity, still unchecked for sign.
    pub fn capacity(&self) -> Result<i64> {
        self.capacity
            .ok_or_else(|| CacheError::MissingParameter("capacity".to_string()))
    }
}

/// Request body for POST /api/get
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetRequest {
    pub key: Option<i64>,
}

impl GetRequest {
    pub fn key(&self) -> Result<Key> {
        let key = self
            .key
            .ok_or_else(|| CacheError::MissingParameter("key".to_string()))?;
        validate_key(key)
    }
}

/// Request body for POST /api/put
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PutRequest {
    pub key: Option<i64>,
    pub value: Option<i64>,
}

impl PutRequest {
    /// Returns the validated key and value.
    pub fn entry(&self) -> Result<(Key, Value)> {
        match (self.key, self.value) {
            (Some(key), Some(value)) => Ok((validate_key(key)?, value)),
            (None, Some(_)) => Err(CacheError::MissingParameter("key".to_string())),
            (Some(_), None) => Err(CacheError::MissingParameter("value".to_string())),
            (None, None) => Err(CacheError::MissingParameter("key and value".to_string())),
        }
    }
}

fn validate_key(key: i64) -> Result<Key> {
    if key < 0 {
        return Err(CacheError::InvalidKey(key));
    }
    Ok(key)
}

/// Request body for POST /api/run_simulation
///
/// Absent fields take the configured workload defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimulationRequest {
    pub num_requests: Option<i64>,
    pub key_range: Option<i64>,
    pub alpha: Option<f64>,
    /// Fixes the generated stream
    pub seed: Option<u64>,
}

impl SimulationRequest {
    /// Fills defaults from `config` and validates the workload.
    pub fn params(&self, config: &Config) -> Result<WorkloadParams> {
        workload_params(self.num_requests, self.key_range, self.alpha, config)
    }

    /// The seed for this run, falling back to the configured one.
    pub fn seed(&self, config: &Config) -> Option<u64> {
        self.seed.or(config.workload_seed)
    }
}

/// Request body for POST /api/analyze_performance
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub cache_sizes: Option<Vec<i64>>,
    pub num_requests: Option<i64>,
    pub key_range: Option<i64>,
    pub alpha: Option<f64>,
    pub seed: Option<u64>,
}

impl AnalyzeRequest {
    pub fn params(&self, config: &Config) -> Result<WorkloadParams> {
        workload_params(self.num_requests, self.key_range, self.alpha, config)
    }

    pub fn seed(&self, config: &Config) -> Option<u64> {
        self.seed.or(config.workload_seed)
    }

    /// Candidate capacities, defaulting to the configured list.
    ///
    /// An explicitly empty list, or one longer than `max_cache_sizes`, is
    /// rejected; individual sizes are checked by the analyzer.
    pub fn cache_sizes(&self, config: &Config) -> Result<Vec<i64>> {
        match &self.cache_sizes {
            Some(sizes) if sizes.is_empty() => Err(CacheError::InvalidParameter(
                "cache_sizes must not be empty".to_string(),
            )),
            Some(sizes) if sizes.len() > config.max_cache_sizes => {
                Err(CacheError::InvalidParameter(format!(
                    "cache_sizes accepts at most {} entries, got {}",
                    config.max_cache_sizes,
                    sizes.len()
                )))
            }
            Some(sizes) => Ok(sizes.clone()),
            None => Ok(config.workload.cache_sizes.clone()),
        }
    }
}

fn workload_params(
    num_requests: Option<i64>,
    key_range: Option<i64>,
    alpha: Option<f64>,
    config: &Config,
) -> Result<WorkloadParams> {
    let defaults = &config.workload;
    let num_requests = match num_requests {
        Some(n) => usize::try_from(n)
            .ok()
            .filter(|&n| n <= config.max_num_requests)
            .ok_or_else(|| {
                CacheError::InvalidParameter(format!(
                    "num_requests must be between 0 and {}, got {}",
                    config.max_num_requests, n
                ))
            })?,
        None => defaults.num_requests,
    };

    WorkloadParams::new(
        num_requests,
        key_range.unwrap_or(defaults.key_range),
        alpha.unwrap_or(defaults.alpha),
    )
}
