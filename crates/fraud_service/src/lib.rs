// Rust guideline compliant 2026-10-19

//! HTTP transport for the fraud risk scorer.
//!
//! Decodes inbound transactions, hands them to `scorer::RiskScorer`, and
//! relays the assessment as JSON. Also exposes liveness, readiness and
//! service-info endpoints. Jitter adapters for the `domain::JitterSource`
//! port live in [`adapters`].

pub mod adapters;
pub mod api;
pub mod config;
pub mod error;

pub use api::create_router;
pub use self::config::ServiceConfig;
pub use error::ServiceError;
