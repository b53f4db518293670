// Rust guideline compliant 2026-10-19

//! Fraud scoring service entry point.
//!
//! Loads configuration, builds the scorer with its configured jitter adapter,
//! and serves the HTTP API until CTRL+C.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run --bin fraud_service
//!
//! # Deterministic scoring on another port
//! PORT=9000 FRAUD_SERVICE__SCORER__FIXED_JITTER=0 cargo run --bin fraud_service
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use fraud_service::{ServiceConfig, create_router};
use scorer::RiskScorer;
use tokio::net::TcpListener;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "fraud_service=info,scorer=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize the tracing subscriber before any async work.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_unset| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "main.dotenv_loaded"),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("failed to read .env file"),
    }

    let config = ServiceConfig::load().context("failed to load service configuration")?;
    let scorer_config = config.scorer_config().context("failed to build scorer config")?;
    let cors = config.cors_layer().context("failed to build CORS layer")?;
    tracing::info!(
        threshold = scorer_config.threshold,
        max_probability = scorer_config.max_probability,
        jitter_max = scorer_config.jitter_max,
        rules = ?scorer_config.rule_ids(),
        "main.scorer_configured"
    );

    let jitter = config.jitter(&scorer_config).context("failed to build jitter source")?;
    let scorer = Arc::new(RiskScorer::new(scorer_config, jitter));
    let app = create_router(scorer, cors);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "main.listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("main.shutdown: complete");
    Ok(())
}

/// Resolve on CTRL+C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("main.shutdown: ctrl_c received, draining connections"),
        Err(e) => tracing::error!(error = %e, "main.shutdown: failed to listen for ctrl_c"),
    }
}
