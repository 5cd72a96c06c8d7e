//! LRU Sim - LRU cache engine and workload simulator
//!
//! A fixed-capacity LRU cache with hit/miss accounting, a power-law workload
//! generator, and replay harnesses for single-cache simulations and
//! multi-capacity comparisons, served over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod simulation;
pub mod workload;

pub use api::AppState;
pub use cache::CacheStore;
pub use config::Config;
pub use error::{CacheError, Result};
