// Rust guideline compliant 2026-10-19

//! Endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use domain::{FraudAssessment, JitterSource, Transaction};
use scorer::RiskScorer;

use super::types::{HealthResponse, ReadyResponse, ServiceInfo};
use crate::error::ServiceError;

/// Static service metadata.
pub(super) async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Fraud Detection ML API".to_owned(),
        status: "running".to_owned(),
        framework: "axum".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

/// Liveness: never touches the scorer.
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy".to_owned() })
}

/// Readiness: reports the active rule ids without scoring anything.
pub(super) async fn ready<J: JitterSource + 'static>(
    State(scorer): State<Arc<RiskScorer<J>>>,
) -> Json<ReadyResponse> {
    let rules = scorer.config().rule_ids().into_iter().map(str::to_owned).collect();
    Json(ReadyResponse { status: "ready".to_owned(), rules })
}

/// Score one transaction.
///
/// # Errors
///
/// Returns [`ServiceError::Prediction`] when the body is not a JSON transaction.
pub(super) async fn predict<J: JitterSource + 'static>(
    State(scorer): State<Arc<RiskScorer<J>>>,
    payload: Result<Json<Transaction>, JsonRejection>,
) -> Result<Json<FraudAssessment>, ServiceError> {
    let Json(transaction) = payload?;
    let assessment = scorer.score(&transaction);
    tracing::info!(
        transaction_id = %assessment.transaction_id,
        user_id = %transaction.user_id,
        merchant = %transaction.merchant,
        is_fraud = assessment.is_fraud,
        fraud_probability = assessment.fraud_probability,
        "api.score"
    );
    Ok(Json(assessment))
}
