// Rust guideline compliant 2026-10-19

//! HTTP surface: router, handlers and wire types.
//!
//! The router is generic over the scorer's jitter adapter so tests can pin
//! jitter while production wiring uses `ConfiguredJitter`.

mod handlers;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use domain::JitterSource;
use scorer::RiskScorer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the service router.
///
/// Routes: `GET /`, `GET /health`, `GET /ready`, `POST /predict`.
pub fn create_router<J>(scorer: Arc<RiskScorer<J>>, cors: CorsLayer) -> Router
where
    J: JitterSource + 'static,
{
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready::<J>))
        .route("/predict", post(handlers::predict::<J>))
        .with_state(scorer)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
