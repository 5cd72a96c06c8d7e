//! API Handlers
//!
//! HTTP request handlers for each cache simulator endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::api::ApiJson;
use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, CreateCacheRequest, CreateCacheResponse, GetRequest,
    GetResponse, HealthResponse, MessageResponse, PutRequest, PutResponse, SimulationRequest,
    SimulationResponse, StatsResponse, WorkloadEcho,
};
use crate::simulation::{analyze_performance, run_simulation};
use crate::workload;

/// Application state shared across all handlers.
///
/// Holds the live cache, if one has been created, behind a single lock.
/// Lookups reorder recency, so `get` takes the write lock like `put` does.
#[derive(Clone)]
pub struct AppState {
    /// The live cache; `None` until the first create_cache
    pub cache: Arc<RwLock<Option<CacheStore>>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a state with no live cache.
    pub fn new(config: Config) -> Self {
        Self {
            cache: Arc::new(RwLock::new(None)),
            config: Arc::new(config),
        }
    }

    /// Creates a state around an existing cache.
    pub fn with_cache(cache: CacheStore, config: Config) -> Self {
        Self {
            cache: Arc::new(RwLock::new(Some(cache))),
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the startup cache when `initial_capacity` is set. A
    /// non-positive capacity is an error rather than "no cache".
    pub fn from_config(config: Config) -> Result<Self> {
        match config.initial_capacity {
            Some(capacity) => Ok(Self::with_cache(CacheStore::new(capacity)?, config)),
            None => Ok(Self::new(config)),
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Handler for POST /api/create_cache
///
/// Replaces the live cache with an empty one of the requested capacity.
pub async fn create_cache_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCacheRequest>,
) -> Result<Json<CreateCacheResponse>> {
    let cache = CacheStore::new(req.capacity()?)?;
    let capacity = cache.capacity();

    // The previous instance, if any, is dropped here
    *state.cache.write().await = Some(cache);
    info!(capacity, "Cache created");

    Ok(Json(CreateCacheResponse::new(capacity)))
}

/// Handler for POST /api/get
pub async fn get_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<GetRequest>,
) -> Result<Json<GetResponse>> {
    // Write lock: a hit changes recency
    let mut guard = state.cache.write().await;
    let cache = guard.as_mut().ok_or(CacheError::NotInitialized)?;
    let key = req.key()?;

    let start = Instant::now();
    let value = cache.get(key);
    let latency_ms = elapsed_ms(start);
    debug!(key, found = value.is_some(), "get");

    Ok(Json(GetResponse::new(key, value, latency_ms)))
}

/// Handler for POST /api/put
pub async fn put_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PutRequest>,
) -> Result<Json<PutResponse>> {
    let mut guard = state.cache.write().await;
    let cache = guard.as_mut().ok_or(CacheError::NotInitialized)?;
    let (key, value) = req.entry()?;

    let start = Instant::now();
    let evicted = cache.put(key, value);
    let latency_ms = elapsed_ms(start);
    debug!(key, value, evicted = ?evicted.map(|e| e.key), "put");

    Ok(Json(PutResponse::new(key, value, latency_ms)))
}

/// Handler for GET /api/stats
///
/// Counters plus a snapshot of every resident entry. Does not alter recency.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let guard = state.cache.read().await;
    let cache = guard.as_ref().ok_or(CacheError::NotInitialized)?;

    Ok(Json(StatsResponse::from_cache(cache)))
}

/// Handler for POST /api/reset_stats
pub async fn reset_stats_handler(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    let mut guard = state.cache.write().await;
    let cache = guard.as_mut().ok_or(CacheError::NotInitialized)?;

    cache.reset_stats();
    info!("Statistics reset");

    Ok(Json(MessageResponse::new("Statistics reset")))
}

/// Handler for POST /api/run_simulation
///
/// Replays a generated workload against the live cache. The write lock is
/// held for the whole run so no other call can interleave with it. A missing
/// cache is reported before any workload parameter.
pub async fn run_simulation_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SimulationRequest>,
) -> Result<Json<SimulationResponse>> {
    let mut guard = state.cache.clone().write_owned().await;
    if guard.is_none() {
        return Err(CacheError::NotInitialized);
    }
    let params = req.params(&state.config)?;
    let seed = req.seed(&state.config);

    let outcome = tokio::task::spawn_blocking(move || {
        let cache = guard.as_mut()?;
        let keys = workload::generate(&params, seed);
        Some(run_simulation(cache, &keys))
    })
    .await
    .map_err(|e| CacheError::Internal(format!("simulation task failed: {}", e)))?
    .ok_or(CacheError::NotInitialized)?;

    info!(
        num_requests = params.num_requests,
        key_range = params.key_range,
        alpha = params.alpha,
        hit_ratio = outcome.hit_ratio(),
        "Simulation finished"
    );

    Ok(Json(SimulationResponse::new(
        WorkloadEcho::new(&params, seed),
        outcome,
    )))
}

/// Handler for POST /api/analyze_performance
///
/// Benchmarks private caches only; the live cache is neither needed nor
/// touched.
pub async fn analyze_performance_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    let params = req.params(&state.config)?;
    let seed = req.seed(&state.config);
    let cache_sizes = req.cache_sizes(&state.config)?;

    let results = tokio::task::spawn_blocking(move || {
        let keys = workload::generate(&params, seed);
        analyze_performance(&cache_sizes, &keys)
    })
    .await
    .map_err(|e| CacheError::Internal(format!("analysis task failed: {}", e)))??;

    info!(
        num_requests = params.num_requests,
        capacities = results.len(),
        "Performance analysis finished"
    );

    Ok(Json(AnalyzeResponse {
        workload: WorkloadEcho::new(&params, seed),
        results,
    }))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
