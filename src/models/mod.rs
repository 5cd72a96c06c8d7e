//! Request and Response models for the cache simulator API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{AnalyzeRequest, CreateCacheRequest, GetRequest, PutRequest, SimulationRequest};
pub use responses::{
    AnalyzeResponse, CreateCacheResponse, GetResponse, HealthResponse, MessageResponse,
    PutResponse, SimulationResponse, StatsResponse, WorkloadEcho,
};
