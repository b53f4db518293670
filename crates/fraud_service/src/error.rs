// Rust guideline compliant 2026-10-19

//! Client-facing error type for the HTTP surface.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Errors reported to HTTP clients instead of an assessment.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request body could not be turned into a transaction.
    #[error("Prediction error: {reason}")]
    Prediction {
        /// Human-readable description.
        reason: String,
    },
}

impl ServiceError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Prediction { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Prediction { reason: rejection.body_text() }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, "api.request_failed");
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));
        (status, body).into_response()
    }
}
