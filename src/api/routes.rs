//! API Routes
//!
//! Configures the Axum router with all cache simulator endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    analyze_performance_handler, create_cache_handler, get_handler, health_handler, put_handler,
    reset_stats_handler, run_simulation_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/create_cache", post(create_cache_handler))
        .route("/api/get", post(get_handler))
        .route("/api/put", post(put_handler))
        .route("/api/stats", get(stats_handler))
        .route("/api/reset_stats", post(reset_stats_handler))
        .route("/api/run_simulation", post(run_simulation_handler))
        .route("/api/analyze_performance", post(analyze_performance_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
