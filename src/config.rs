//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::{CacheError, Result};
use crate::workload::WorkloadParams;

/// Analysis capacities used when a request names none.
pub const DEFAULT_CACHE_SIZES: [i64; 5] = [10, 50, 100, 200, 500];

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Capacity of the cache created at startup, if any
    pub initial_capacity: Option<i64>,
    /// Workload defaults applied to requests that omit them
    pub workload: WorkloadDefaults,
    /// Largest accepted `num_requests`
    pub max_num_requests: usize,
    /// Largest accepted number of capacities in one analysis
    pub max_cache_sizes: usize,
    /// Seed used for workloads that do not carry their own
    pub workload_seed: Option<u64>,
}

/// Default workload shape for simulation and analysis requests.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadDefaults {
    pub num_requests: usize,
    pub key_range: i64,
    pub alpha: f64,
    pub cache_sizes: Vec<i64>,
}

impl Default for WorkloadDefaults {
    fn default() -> Self {
        Self {
            num_requests: 1000,
            key_range: 200,
            alpha: 1.0,
            cache_sizes: DEFAULT_CACHE_SIZES.to_vec(),
        }
    }
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `INITIAL_CAPACITY` - create a cache at startup (default: unset)
    /// - `DEFAULT_NUM_REQUESTS` - workload length (default: 1000)
    /// - `DEFAULT_KEY_RANGE` - workload key range (default: 200)
    /// - `DEFAULT_ALPHA` - workload skew (default: 1.0)
    /// - `MAX_NUM_REQUESTS` - upper bound on workload length (default: 1000000)
    /// - `MAX_CACHE_SIZES` - upper bound on analysis capacities (default: 64)
    /// - `WORKLOAD_SEED` - fixed seed for workloads (default: unset)
    ///
    /// `INITIAL_CAPACITY` must parse when set; other unparseable values fall
    /// back to the default. The result is checked with [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            initial_capacity: env_strict("INITIAL_CAPACITY")?,
            workload: WorkloadDefaults {
                num_requests: env_or("DEFAULT_NUM_REQUESTS", defaults.workload.num_requests),
                key_range: env_or("DEFAULT_KEY_RANGE", defaults.workload.key_range),
                alpha: env_or("DEFAULT_ALPHA", defaults.workload.alpha),
                cache_sizes: defaults.workload.cache_sizes,
            },
            max_num_requests: env_or("MAX_NUM_REQUESTS", defaults.max_num_requests),
            max_cache_sizes: env_or("MAX_CACHE_SIZES", defaults.max_cache_sizes),
            workload_seed: env_parse("WORKLOAD_SEED"),
        };

        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the server could not run with.
    ///
    /// The startup capacity must be positive and the workload defaults must
    /// pass the same checks as a request that relies on them.
    pub fn validate(&self) -> Result<()> {
        if let Some(capacity) = self.initial_capacity {
            if capacity < 1 {
                return Err(CacheError::InvalidCapacity(capacity));
            }
        }

        let defaults = &self.workload;
        if defaults.num_requests > self.max_num_requests {
            return Err(CacheError::InvalidParameter(format!(
                "DEFAULT_NUM_REQUESTS ({}) exceeds MAX_NUM_REQUESTS ({})",
                defaults.num_requests, self.max_num_requests
            )));
        }
        WorkloadParams::new(defaults.num_requests, defaults.key_range, defaults.alpha)?;

        if defaults.cache_sizes.len() > self.max_cache_sizes {
            return Err(CacheError::InvalidParameter(format!(
                "MAX_CACHE_SIZES ({}) is below the {} default capacities",
                self.max_cache_sizes,
                defaults.cache_sizes.len()
            )));
        }
        Ok(())
    }
}

/// Parses a variable that must be well-formed when present.
fn env_strict<T: FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => parse_var(name, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| {
        CacheError::InvalidParameter(format!("{} has an invalid value: {:?}", name, raw))
    })
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env_parse(name).unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            initial_capacity: None,
            workload: WorkloadDefaults::default(),
            max_num_requests: 1_000_000,
            max_cache_sizes: 64,
            workload_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.initial_capacity, None);
        assert_eq!(config.workload.num_requests, 1000);
        assert_eq!(config.workload.key_range, 200);
        assert_eq!(config.workload.alpha, 1.0);
        assert_eq!(config.workload.cache_sizes, vec![10, 50, 100, 200, 500]);
        assert_eq!(config.max_num_requests, 1_000_000);
        assert_eq!(config.max_cache_sizes, 64);
        assert_eq!(config.workload_seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        for name in [
            "SERVER_PORT",
            "INITIAL_CAPACITY",
            "DEFAULT_NUM_REQUESTS",
            "DEFAULT_KEY_RANGE",
            "DEFAULT_ALPHA",
            "MAX_NUM_REQUESTS",
            "MAX_CACHE_SIZES",
            "WORKLOAD_SEED",
        ] {
            env::remove_var(name);
        }

        assert_eq!(Config::from_env().unwrap(), Config::default());
    }

    #[test]
    fn test_env_strict_rejects_garbage() {
        env::set_var("LRU_SIM_TEST_STRICT", "ten");
        assert!(matches!(
            env_strict::<i64>("LRU_SIM_TEST_STRICT"),
            Err(CacheError::InvalidParameter(_))
        ));

        env::set_var("LRU_SIM_TEST_STRICT", " 12 ");
        assert_eq!(env_strict::<i64>("LRU_SIM_TEST_STRICT").unwrap(), Some(12));

        env::remove_var("LRU_SIM_TEST_STRICT");
        assert_eq!(env_strict::<i64>("LRU_SIM_TEST_STRICT").unwrap(), None);
    }

    #[test]
    fn test_parse_var_names_the_variable() {
        let err = parse_var::<i64>("INITIAL_CAPACITY", "abc").unwrap_err();
        assert!(err.to_string().contains("INITIAL_CAPACITY"));
    }

    #[test]
    fn test_validate_initial_capacity() {
        for capacity in [0, -4] {
            let config = Config {
                initial_capacity: Some(capacity),
                ..Config::default()
            };
            assert_eq!(config.validate(), Err(CacheError::InvalidCapacity(capacity)));
        }

        let config = Config {
            initial_capacity: Some(1),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_workload_defaults() {
        let bad_range = Config {
            workload: WorkloadDefaults {
                key_range: 0,
                ..WorkloadDefaults::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            bad_range.validate(),
            Err(CacheError::InvalidParameter(_))
        ));

        let bad_alpha = Config {
            workload: WorkloadDefaults {
                alpha: -1.0,
                ..WorkloadDefaults::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            bad_alpha.validate(),
            Err(CacheError::InvalidParameter(_))
        ));

        let too_long = Config {
            max_num_requests: 10,
            ..Config::default()
        };
        assert!(matches!(
            too_long.validate(),
            Err(CacheError::InvalidParameter(_))
        ));

        let too_few_sizes = Config {
            max_cache_sizes: 2,
            ..Config::default()
        };
        assert!(too_few_sizes.validate().is_err());
    }

    #[test]
    fn test_env_parse_rejects_garbage() {
        env::set_var("LRU_SIM_TEST_GARBAGE", "not-a-number");
        assert_eq!(env_parse::<u16>("LRU_SIM_TEST_GARBAGE"), None);
        assert_eq!(env_or("LRU_SIM_TEST_GARBAGE", 7u16), 7);
        env::remove_var("LRU_SIM_TEST_GARBAGE");
    }
}
