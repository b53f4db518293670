// Rust guideline compliant 2026-10-19

//! End-to-end tests for the HTTP surface, driven through the router with
//! `tower::ServiceExt::oneshot` (no socket).

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{DateTime, Utc};
use fraud_service::adapters::fixed_jitter::FixedJitter;
use fraud_service::{ServiceConfig, create_router};
use http_body_util::BodyExt as _;
use scorer::{RiskScorer, ScorerConfig, rules};
use serde_json::{Value, json};
use tower::ServiceExt as _;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn app_with(config: ScorerConfig, jitter: FixedJitter) -> Router {
    let scorer = Arc::new(RiskScorer::new(config, jitter));
    create_router(scorer, ServiceConfig::default().cors_layer().unwrap())
}

fn app() -> Router {
    app_with(ScorerConfig::default(), FixedJitter::zero())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: &Value) -> Request<Body> {
    post_raw(&body.to_string())
}

fn post_raw(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Static endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_reports_service_metadata() {
    let (status, body) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Fraud Detection ML API");
    assert_eq!(body["status"], "running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_is_static() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn ready_lists_active_rules() {
    let (status, body) = send(app(), get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["rules"].as_array().unwrap().len(), 5);

    let config = ScorerConfig::builder().without_rule(rules::UNUSUAL_TIME).build().unwrap();
    let (_, body) = send(app_with(config, FixedJitter::zero()), get("/ready")).await;
    let ids: Vec<&str> = body["rules"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
    assert_eq!(ids, [rules::HIGH_AMOUNT, rules::RISKY_CATEGORY, rules::FOREIGN_TRANSACTION, rules::MOBILE_DEVICE]);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = send(app(), get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[tokio::test]
async fn predict_threshold_example() {
    let payload = json!({
        "transaction_id": "TXN-100",
        "user_id": "U-1",
        "amount": 1500,
        "currency": "USD",
        "merchant": "BestBuy",
        "category": "Electronics",
        "city": "Austin",
        "country": "US",
        "device": "desktop",
        "transaction_time": "2024-01-01T14:00:00"
    });
    let (status, body) = send(app(), post_json(&payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction_id"], "TXN-100");
    assert_eq!(body["is_fraud"], false);
    assert_eq!(body["fraud_probability"], 0.5);
    assert_eq!(body["risk_score"], 50.0);
    assert_eq!(body["reasons"], json!(["High transaction amount", "Risky merchant category"]));
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(timestamp.parse::<DateTime<Utc>>().is_ok(), "timestamp {timestamp:?}");
}

#[tokio::test]
async fn predict_everything_fires_and_is_capped() {
    let payload = json!({
        "transaction_id": "TXN-101",
        "amount": 9000.5,
        "category": "gambling",
        "country": "NG",
        "device": "mobile",
        "transaction_time": "2024-01-01T23:15:00"
    });
    let (status, body) = send(app_with(ScorerConfig::default(), FixedJitter::new(0.2)), post_json(&payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_fraud"], true);
    assert_eq!(body["fraud_probability"], 0.95);
    assert_eq!(body["risk_score"], 95.0);
    assert_eq!(body["reasons"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn predict_sparse_payload_uses_defaults() {
    let (status, body) = send(app(), post_json(&json!({"transaction_id": "TXN-102", "country": "US"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reasons"], json!(["Low risk transaction"]));
    assert_eq!(body["fraud_probability"], 0.0);
    assert_eq!(body["is_fraud"], false);
}

#[tokio::test]
async fn predict_malformed_time_is_tolerated() {
    let payload = json!({"transaction_id": "TXN-103", "country": "US", "transaction_time": "x"});
    let (status, body) = send(app(), post_json(&payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reasons"], json!(["Low risk transaction"]));
}

// ---------------------------------------------------------------------------
// Request failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn predict_rejects_invalid_json() {
    let (status, body) = send(app(), post_raw("{not json")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Prediction error:"), "{body}");
    assert_eq!(body["status"], 500);
    assert!(body.get("is_fraud").is_none());
}

#[tokio::test]
async fn predict_rejects_wrong_field_type() {
    let (status, body) = send(app(), post_json(&json!({"amount": "a lot"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("amount"), "{body}");
}

#[tokio::test]
async fn predict_requires_json_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .body(Body::from(r#"{"amount": 5}"#))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Prediction error:"));
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn permissive_cors_by_default() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn configured_origins_are_echoed() {
    let config = ServiceConfig {
        cors_allowed_origins: vec!["http://dashboard.local".to_owned()],
        ..ServiceConfig::default()
    };
    let scorer = Arc::new(RiskScorer::new(ScorerConfig::default(), FixedJitter::zero()));
    let app = create_router(scorer, config.cors_layer().unwrap());

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://dashboard.local")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://dashboard.local");

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://evil.local")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_are_independent() {
    let app = app();
    let mut handles = Vec::new();
    for i in 0..32 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let payload = json!({"transaction_id": format!("TXN-{i}"), "amount": 50, "country": "CA", "device": "mobile",
                                 "transaction_time": "2024-01-01T03:00:00"});
            send(app, post_json(&payload)).await
        }));
    }
    for (i, handle) in handles.into_iter().enumerate() {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transaction_id"], format!("TXN-{i}"));
        assert_eq!(body["fraud_probability"], 0.4);
    }
}
