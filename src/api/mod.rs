//! API Module
//!
//! HTTP handlers and routing for the cache simulator REST API.
//!
//! # Endpoints
//! - `POST /api/create_cache` - Replace the live cache
//! - `POST /api/get` - Look up a key
//! - `POST /api/put` - Insert or update a key
//! - `GET /api/stats` - Counters and resident entries
//! - `POST /api/reset_stats` - Zero the counters
//! - `POST /api/run_simulation` - Replay a skewed workload on the live cache
//! - `POST /api/analyze_performance` - Compare capacities on one workload
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::ApiJson;
pub use handlers::*;
pub use routes::create_router;
