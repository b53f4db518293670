// Rust guideline compliant 2026-10-19

//! Service configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file
//! (`config/fraud_service.toml`), `FRAUD_SERVICE__*` environment variables,
//! then a bare `PORT` variable.
//!
//! ```text
//! FRAUD_SERVICE__PORT=9000
//! FRAUD_SERVICE__SCORER__SEED=42
//! FRAUD_SERVICE__SCORER__DISABLED_RULES=unusual_time,mobile_device
//! ```

use std::path::Path;

use axum::http::HeaderValue;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use domain::RiskRule;
use scorer::{ScorerConfig, ScorerError};
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::adapters::ConfiguredJitter;
use crate::adapters::fixed_jitter::FixedJitter;
use crate::adapters::uniform_jitter::UniformJitter;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/fraud_service.toml";

/// Prefix of service environment variables.
const ENV_PREFIX: &str = "FRAUD_SERVICE";

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors raised while loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// The `PORT` override is not a valid port number.
    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        /// The rejected value.
        value: String,
    },
    /// A CORS origin is not a valid header value.
    #[error("invalid CORS origin {origin:?}")]
    InvalidOrigin {
        /// The rejected origin.
        origin: String,
    },
    /// `fixed_jitter` is not finite or lies outside `[0, jitter_max)`.
    #[error("invalid fixed_jitter {value}: must be finite and in [0, {jitter_max})")]
    InvalidJitter {
        /// The rejected value.
        value: f64,
        /// Effective jitter bound it was checked against.
        jitter_max: f64,
    },
    /// The scorer settings are inconsistent.
    #[error(transparent)]
    Scorer(#[from] ScorerError),
}

// ---------------------------------------------------------------------------
// ServiceConfig
// ---------------------------------------------------------------------------

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    /// Scorer tuning.
    pub scorer: ScorerSettings,
}

/// Scorer tuning knobs. Unset values keep the scorer defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ScorerSettings {
    /// Classification threshold.
    pub threshold: Option<f64>,
    /// Probability cap.
    pub max_probability: Option<f64>,
    /// Exclusive upper bound of the jitter.
    pub jitter_max: Option<f64>,
    /// Seed for the uniform jitter generator.
    pub seed: Option<u64>,
    /// Constant jitter instead of random draws.
    pub fixed_jitter: Option<f64>,
    /// Rule ids to drop from the rule set.
    pub disabled_rules: Vec<String>,
    /// Full replacement rule set. `None` keeps the stock rules.
    pub rules: Option<Vec<RiskRule>>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8000,
            cors_allowed_origins: Vec::new(),
            scorer: ScorerSettings::default(),
        }
    }
}

impl ServiceConfig {
    /// Load from [`DEFAULT_CONFIG_PATH`] and the environment.
    ///
    /// # Errors
    ///
    /// See [`load_from`](Self::load_from).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load from an optional file at `path`, then the environment.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a source is malformed, or
    /// [`ConfigError::InvalidPort`] when `PORT` is not a `u16`.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .with_list_parse_key("scorer.disabled_rules"),
            );
        let mut config = Self::from_builder(builder)?;
        if let Ok(value) = std::env::var("PORT") {
            config.port = value.trim().parse().map_err(|_parse| ConfigError::InvalidPort { value })?;
        }
        Ok(config)
    }

    /// Parse a TOML document on top of the defaults. Ignores the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when the document is malformed.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(File::from_str(text, FileFormat::Toml)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// `host:port` to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the validated scorer configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Scorer`] when the settings are rejected by the builder.
    pub fn scorer_config(&self) -> Result<ScorerConfig, ConfigError> {
        let settings = &self.scorer;
        let mut builder = ScorerConfig::builder();
        if let Some(rules) = &settings.rules {
            builder = builder.rules(rules.clone());
        }
        if let Some(threshold) = settings.threshold {
            builder = builder.threshold(threshold);
        }
        if let Some(max_probability) = settings.max_probability {
            builder = builder.max_probability(max_probability);
        }
        if let Some(jitter_max) = settings.jitter_max {
            builder = builder.jitter_max(jitter_max);
        }
        for id in &settings.disabled_rules {
            builder = builder.without_rule(id.as_str());
        }
        Ok(builder.build()?)
    }

    /// Select the jitter adapter: fixed when `fixed_jitter` is set, otherwise uniform.
    ///
    /// `scorer` is the validated config from [`scorer_config`](Self::scorer_config);
    /// its `jitter_max` bounds `fixed_jitter`. A zero `fixed_jitter` is always accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidJitter`] when `fixed_jitter` is not finite,
    /// negative, or not below `jitter_max`.
    pub fn jitter(&self, scorer: &ScorerConfig) -> Result<ConfiguredJitter, ConfigError> {
        let Some(value) = self.scorer.fixed_jitter else {
            return Ok(ConfiguredJitter::Uniform(UniformJitter::new(self.scorer.seed)));
        };
        let jitter_max = scorer.jitter_max;
        if !value.is_finite() || value < 0.0 || (value > 0.0 && value >= jitter_max) {
            return Err(ConfigError::InvalidJitter { value, jitter_max });
        }
        Ok(ConfiguredJitter::Fixed(FixedJitter::new(value)))
    }

    /// CORS layer: permissive when no origins are configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrigin`] for an origin that is not a valid header value.
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        if self.cors_allowed_origins.is_empty() {
            return Ok(CorsLayer::permissive());
        }
        let origins = self
            .cors_allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_invalid| ConfigError::InvalidOrigin { origin: origin.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any))
    }
}
