// Rust guideline compliant 2026-10-19

//! Response bodies for the non-scoring endpoints.
//!
//! The scoring endpoint reads `domain::Transaction` and writes
//! `domain::FraudAssessment` directly.

use serde::{Deserialize, Serialize};

/// `GET /` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name.
    pub message: String,
    /// Always `"running"` while the process serves requests.
    pub status: String,
    /// HTTP framework serving the API.
    pub framework: String,
    /// Crate version.
    pub version: String,
}

/// `GET /health` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"`.
    pub status: String,
}

/// `GET /ready` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Always `"ready"` once the scorer is built.
    pub status: String,
    /// Ids of the active rules, in evaluation order.
    pub rules: Vec<String>,
}
