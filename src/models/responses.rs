//! Response DTOs for the cache simulator API
//!
//! Defines the structure of outgoing HTTP response bodies. Hit and miss
//! ratios are always on the 0-100 scale.

use serde::Serialize;

use crate::cache::{CacheEntry, CacheStore, Key, Value};
use crate::simulation::{CapacityResult, SimulationOutcome};
use crate::workload::WorkloadParams;

/// Response body for POST /api/create_cache
#[derive(Debug, Clone, Serialize)]
pub struct CreateCacheResponse {
    pub message: String,
    pub capacity: usize,
}

impl CreateCacheResponse {
    pub fn new(capacity: usize) -> Self {
        Self {
            message: format!("Cache created with capacity {}", capacity),
            capacity,
        }
    }
}

/// Response body for POST /api/get
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: Key,
    pub found: bool,
    /// Present only when the key was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub latency_ms: f64,
}

impl GetResponse {
    pub fn new(key: Key, value: Option<Value>, latency_ms: f64) -> Self {
        Self {
            key,
            found: value.is_some(),
            value,
            latency_ms,
        }
    }
}

/// Response body for POST /api/put
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    pub message: String,
    pub latency_ms: f64,
}

impl PutResponse {
    pub fn new(key: Key, value: Value, latency_ms: f64) -> Self {
        Self {
            message: format!("Added key {} with value {}", key, value),
            latency_ms,
        }
    }
}

/// Response body for GET /api/stats
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub total_accesses: u64,
    /// Percentage of lookups that hit
    pub hit_ratio: f64,
    pub evictions: u64,
    pub capacity: usize,
    pub current_size: usize,
    /// Resident entries, most recently used first
    pub cache_items: Vec<CacheEntry>,
}

impl StatsResponse {
    /// Snapshots counters and contents of `cache`.
    pub fn from_cache(cache: &CacheStore) -> Self {
        let stats = cache.stats();
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_accesses: stats.total_accesses(),
            hit_ratio: stats.hit_percentage(),
            evictions: stats.evictions,
            capacity: cache.capacity(),
            current_size: cache.len(),
            cache_items: cache.entries(),
        }
    }
}

/// Body for operations that only acknowledge (POST /api/reset_stats)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Workload parameters echoed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadEcho {
    pub num_requests: usize,
    pub key_range: u32,
    pub alpha: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl WorkloadEcho {
    pub fn new(params: &WorkloadParams, seed: Option<u64>) -> Self {
        Self {
            num_requests: params.num_requests,
            key_range: params.key_range,
            alpha: params.alpha,
            seed,
        }
    }
}

/// Response body for POST /api/run_simulation
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResponse {
    #[serde(flatten)]
    pub workload: WorkloadEcho,
    pub total_time_sec: f64,
    pub hits: u64,
    pub misses: u64,
    pub hit_ratio: f64,
    pub hits_over_time: Vec<u64>,
    pub miss_ratio_over_time: Vec<f64>,
}

impl SimulationResponse {
    pub fn new(workload: WorkloadEcho, outcome: SimulationOutcome) -> Self {
        Self {
            workload,
            total_time_sec: outcome.elapsed.as_secs_f64(),
            hits: outcome.stats.hits,
            misses: outcome.stats.misses,
            hit_ratio: outcome.hit_ratio(),
            hits_over_time: outcome.hits_over_time,
            miss_ratio_over_time: outcome.miss_ratio_over_time,
        }
    }
}

/// Response body for POST /api/analyze_performance
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub workload: WorkloadEcho,
    pub results: Vec<CapacityResult>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    use crate::cache::CacheStats;

    #[test]
    fn test_get_response_found() {
        let json = serde_json::to_value(GetResponse::new(3, Some(30), 0.01)).unwrap();
        assert_eq!(json["found"], json!(true));
        assert_eq!(json["value"], json!(30));
    }

    #[test]
    fn test_get_response_omits_value_when_missing() {
        let json = serde_json::to_value(GetResponse::new(3, None, 0.01)).unwrap();
        assert_eq!(json["found"], json!(false));
        assert!(json.get("value").is_none());
        assert!(json.get("latency_ms").is_some());
    }

    #[test]
    fn test_put_response_message() {
        let resp = PutResponse::new(4, 40, 0.0);
        assert_eq!(resp.message, "Added key 4 with value 40");
    }

    #[test]
    fn test_stats_response_from_cache() {
        let mut cache = CacheStore::new(2).unwrap();
        cache.put(1, 10);
        cache.put(2, 20);
        cache.get(1);
        cache.get(3);
        cache.get(1);
        cache.get(2);

        let resp = StatsResponse::from_cache(&cache);

        assert_eq!(resp.hits, 3);
        assert_eq!(resp.misses, 1);
        assert_eq!(resp.total_accesses, 4);
        assert!((resp.hit_ratio - 75.0).abs() < 1e-9);
        assert_eq!(resp.capacity, 2);
        assert_eq!(resp.current_size, 2);
        assert_eq!(
            resp.cache_items,
            vec![CacheEntry::new(2, 20), CacheEntry::new(1, 10)]
        );
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let cache = CacheStore::new(5).unwrap();
        let resp = StatsResponse::from_cache(&cache);
        assert_eq!(resp.hit_ratio, 0.0);
        assert!(resp.cache_items.is_empty());
    }

    #[test]
    fn test_simulation_response_flattens_workload() {
        let params = WorkloadParams::new(10, 5, 1.5).unwrap();
        let outcome = SimulationOutcome {
            elapsed: Duration::from_millis(250),
            stats: CacheStats {
                hits: 6,
                misses: 4,
                evictions: 0,
            },
            hits_over_time: vec![6],
            miss_ratio_over_time: vec![40.0],
        };

        let json =
            serde_json::to_value(SimulationResponse::new(WorkloadEcho::new(&params, None), outcome))
                .unwrap();

        assert_eq!(json["num_requests"], json!(10));
        assert_eq!(json["key_range"], json!(5));
        assert_eq!(json["alpha"], json!(1.5));
        assert!(json.get("seed").is_none());
        assert_eq!(json["total_time_sec"], json!(0.25));
        assert_eq!(json["hit_ratio"], json!(60.0));
        assert_eq!(json["hits_over_time"], json!([6]));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
