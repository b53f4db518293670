// Rust guideline compliant 2026-10-19

//! Shared domain types for the fraud risk scoring service.
//!
//! Defines `Transaction`, `FraudAssessment`, the configurable rule model
//! (`RiskRule`, `Condition`) and the `JitterSource` hexagonal port.
//! The scorer and the service crates depend on this crate; it holds no scoring logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A single transaction submitted for risk assessment.
///
/// Every field defaults when absent from the inbound payload (empty string or
/// zero), so a sparse record is still scoreable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// Opaque identifier, echoed unchanged into the assessment.
    pub transaction_id: String,
    /// Account holder identifier. Not scored.
    pub user_id: String,
    /// Transaction amount. Any sign and magnitude; no currency conversion.
    pub amount: f64,
    /// ISO currency code. Not scored.
    pub currency: String,
    /// Merchant name. Not scored.
    pub merchant: String,
    /// Free-text merchant category (compared case-insensitively).
    pub category: String,
    /// City of the point of sale. Not scored.
    pub city: String,
    /// Country code or name (compared case-sensitively).
    pub country: String,
    /// ISO-8601-like timestamp; the hour is read from character offsets 11..13.
    pub transaction_time: String,
    /// Device descriptor (compared case-sensitively).
    pub device: String,
}

// ---------------------------------------------------------------------------
// FraudAssessment
// ---------------------------------------------------------------------------

/// Risk assessment produced for one [`Transaction`].
///
/// Created fresh per request; carries no identity beyond the response it is
/// embedded in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAssessment {
    /// Echo of [`Transaction::transaction_id`].
    pub transaction_id: String,
    /// `true` when the unrounded probability is strictly above the threshold.
    pub is_fraud: bool,
    /// Probability-like score in `[0, max_probability]`, rounded to 3 decimals.
    pub fraud_probability: f64,
    /// `fraud_probability` scaled by 100, rounded to 1 decimal.
    pub risk_score: f64,
    /// Ordered, non-empty list of contributing reasons.
    pub reasons: Vec<String>,
    /// Assessment creation time (not the transaction time).
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Rule model
// ---------------------------------------------------------------------------

/// Predicate over a [`Transaction`], evaluated by the scorer.
///
/// Serialized with an internal `kind` tag so rule sets can be declared in
/// configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// `amount > threshold`.
    AmountAbove {
        /// Exclusive lower bound.
        threshold: f64,
    },
    /// Lower-cased category is one of `categories`.
    CategoryIn {
        /// Lower-case category names.
        categories: Vec<String>,
    },
    /// Country differs from `country` (case-sensitive).
    CountryNot {
        /// The home country.
        country: String,
    },
    /// Device equals `device` (case-sensitive).
    DeviceIs {
        /// The device descriptor to match.
        device: String,
    },
    /// Parsed hour is `< earliest` or `> latest`. Unparseable times never match.
    HourOutside {
        /// First ordinary hour, inclusive.
        earliest: u8,
        /// Last ordinary hour, inclusive.
        latest: u8,
    },
}

/// A named, weighted rule: when `condition` matches, `weight` is added to the
/// risk and `reason` is appended to the reason list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRule {
    /// Stable identifier used to disable or override the rule (e.g. `"unusual_time"`).
    pub id: String,
    /// Predicate that fires the rule.
    pub condition: Condition,
    /// Non-negative risk contribution.
    pub weight: f64,
    /// Human-readable reason reported when the rule fires.
    pub reason: String,
}

impl RiskRule {
    /// Build a rule from its parts.
    #[must_use]
    pub fn new(id: impl Into<String>, condition: Condition, weight: f64, reason: impl Into<String>) -> Self {
        Self { id: id.into(), condition, weight, reason: reason.into() }
    }
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Hexagonal port: source of the uniform score jitter.
///
/// The scorer depends exclusively on this trait. Implementations must be safe
/// to share across concurrently running scoring calls.
pub trait JitterSource: Send + Sync {
    /// Draw a value in `[0, max)`. Returns `0.0` when `max <= 0`.
    fn sample(&self, max: f64) -> f64;
}
