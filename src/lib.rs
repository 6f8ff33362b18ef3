//! Hello/status service for the DevOps challenge.
//!
//! Routes:
//! - `GET /`        welcome page describing the challenge brief
//! - `GET /hello`   fixed JSON payload with a fresh UTC timestamp
//! - `GET /health`  liveness probe with build metadata
//! - `GET /metrics` Prometheus exposition

pub mod common;
pub mod structures;
pub mod web;

pub use common::config::AppConfig;
pub use web::build;
