// Rust guideline compliant 2026-10-19

//! Risk scorer for single transactions.
//!
//! [`RiskScorer`] evaluates a configurable list of weighted rules, adds jitter
//! drawn from an injected `domain::JitterSource`, caps and classifies the
//! result, and returns a `domain::FraudAssessment`.
//!
//! Entry points: [`RiskScorer::score`], [`RiskScorer::evaluate`].
//! Configuration via [`ScorerConfig::builder`].

pub mod rules;

use chrono::{DateTime, Utc};
use domain::{FraudAssessment, JitterSource, RiskRule, Transaction};
use std::collections::HashSet;

/// Reason reported when no rule fires.
pub const LOW_RISK_REASON: &str = "Low risk transaction";

// ---------------------------------------------------------------------------
// ScorerError
// ---------------------------------------------------------------------------

/// Errors raised while building a scorer configuration.
///
/// Scoring itself never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScorerError {
    /// The supplied configuration is invalid.
    #[error("invalid scorer configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl ScorerError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }
}

// ---------------------------------------------------------------------------
// ScorerConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for a [`RiskScorer`].
///
/// Construct via [`ScorerConfig::builder`], or use [`Default`] for the stock
/// rule set and constants.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerConfig {
    /// Classification threshold; a transaction is fraud when risk is strictly above it.
    pub threshold: f64,
    /// Upper bound applied to the jittered risk.
    pub max_probability: f64,
    /// Exclusive upper bound of the uniform jitter.
    pub jitter_max: f64,
    /// Rules evaluated in order; order only affects the reason list.
    pub rules: Vec<RiskRule>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            max_probability: 0.95,
            jitter_max: 0.2,
            rules: rules::default_rules(),
        }
    }
}

/// Builder for [`ScorerConfig`].
///
/// Obtain via [`ScorerConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct ScorerConfigBuilder {
    config: ScorerConfig,
    disabled: Vec<String>,
    reweighted: Vec<(String, f64)>,
}

impl ScorerConfig {
    /// Create a builder seeded with the default values.
    ///
    /// Default values: `threshold = 0.5`, `max_probability = 0.95`,
    /// `jitter_max = 0.2`, `rules = rules::default_rules()`.
    #[must_use]
    pub fn builder() -> ScorerConfigBuilder {
        ScorerConfigBuilder { config: Self::default(), disabled: Vec::new(), reweighted: Vec::new() }
    }

    /// Ids of the active rules, in evaluation order.
    #[must_use]
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id.as_str()).collect()
    }
}

impl ScorerConfigBuilder {
    /// Override the classification threshold.
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Override the probability cap.
    #[must_use]
    pub fn max_probability(mut self, max_probability: f64) -> Self {
        self.config.max_probability = max_probability;
        self
    }

    /// Override the jitter upper bound. `0.0` disables jitter.
    #[must_use]
    pub fn jitter_max(mut self, jitter_max: f64) -> Self {
        self.config.jitter_max = jitter_max;
        self
    }

    /// Replace the whole rule list.
    #[must_use]
    pub fn rules(mut self, rules: Vec<RiskRule>) -> Self {
        self.config.rules = rules;
        self
    }

    /// Append a rule, or replace the rule with the same id in place.
    #[must_use]
    pub fn rule(mut self, rule: RiskRule) -> Self {
        match self.config.rules.iter_mut().find(|r| r.id == rule.id) {
            Some(existing) => *existing = rule,
            None => self.config.rules.push(rule),
        }
        self
    }

    /// Remove the rule with `id`. Unknown ids are rejected by [`build`](Self::build).
    #[must_use]
    pub fn without_rule(mut self, id: impl Into<String>) -> Self {
        self.disabled.push(id.into());
        self
    }

    /// Change the weight of the rule with `id`. Unknown ids are rejected by [`build`](Self::build).
    #[must_use]
    pub fn weight(mut self, id: impl Into<String>, weight: f64) -> Self {
        self.reweighted.push((id.into(), weight));
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScorerError::InvalidConfig`] when `threshold` or
    /// `max_probability` lie outside `[0, 1]`, `jitter_max` is negative or not
    /// finite, a rule id is empty or duplicated, a weight is negative or not
    /// finite, or a disabled/reweighted id names no rule.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<ScorerConfig, ScorerError> {
        let Self { mut config, disabled, reweighted } = self;

        for (id, weight) in reweighted {
            let rule = config
                .rules
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| ScorerError::invalid(format!("cannot reweight unknown rule {id:?}")))?;
            rule.weight = weight;
        }
        for id in disabled {
            let before = config.rules.len();
            config.rules.retain(|r| r.id != id);
            if config.rules.len() == before {
                return Err(ScorerError::invalid(format!("cannot disable unknown rule {id:?}")));
            }
        }

        if !(0.0..=1.0).contains(&config.threshold) {
            return Err(ScorerError::invalid("threshold must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&config.max_probability) {
            return Err(ScorerError::invalid("max_probability must be in [0, 1]"));
        }
        if !config.jitter_max.is_finite() || config.jitter_max < 0.0 {
            return Err(ScorerError::invalid("jitter_max must be finite and >= 0"));
        }

        let mut seen = HashSet::new();
        for rule in &config.rules {
            if rule.id.is_empty() {
                return Err(ScorerError::invalid("rule id must not be empty"));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(ScorerError::invalid(format!("duplicate rule id {:?}", rule.id)));
            }
            if !rule.weight.is_finite() || rule.weight < 0.0 {
                return Err(ScorerError::invalid(format!("rule {:?} weight must be finite and >= 0", rule.id)));
            }
        }
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// RiskScorer
// ---------------------------------------------------------------------------

/// Pre-jitter outcome of rule evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEvaluation {
    /// Sum of the weights of every rule that fired.
    pub risk: f64,
    /// Reasons of the fired rules, in rule order. Empty when nothing fired.
    pub reasons: Vec<String>,
}

/// Scores transactions against a configured rule set.
///
/// Generic over `J: JitterSource` for static dispatch. Holds no mutable state
/// of its own, so a single instance can serve concurrent callers as long as
/// `J` is thread-safe (guaranteed by the port's `Send + Sync` bound).
#[derive(Debug)]
pub struct RiskScorer<J: JitterSource> {
    config: ScorerConfig,
    jitter: J,
}

impl<J: JitterSource> RiskScorer<J> {
    /// Create a scorer from `config` and a jitter source.
    #[must_use]
    pub fn new(config: ScorerConfig, jitter: J) -> Self {
        Self { config, jitter }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Evaluate every rule without jitter, capping or classification.
    #[must_use]
    pub fn evaluate(&self, tx: &Transaction) -> RuleEvaluation {
        let mut risk = 0.0;
        let mut reasons = Vec::new();
        for rule in &self.config.rules {
            if rules::matches(&rule.condition, tx) {
                risk += rule.weight;
                reasons.push(rule.reason.clone());
            }
        }
        RuleEvaluation { risk, reasons }
    }

    /// Score `tx`, stamping the assessment with the current UTC time.
    #[must_use]
    pub fn score(&self, tx: &Transaction) -> FraudAssessment {
        self.score_at(tx, Utc::now())
    }

    /// Score `tx` with an explicit assessment timestamp.
    #[must_use]
    pub fn score_at(&self, tx: &Transaction, timestamp: DateTime<Utc>) -> FraudAssessment {
        let RuleEvaluation { risk, reasons } = self.evaluate(tx);
        let fired = reasons.len();

        let jitter_max = self.config.jitter_max;
        let jitter = bounded_jitter(self.jitter.sample(jitter_max), jitter_max);
        let risk = (risk + jitter).clamp(0.0, self.config.max_probability);
        let is_fraud = risk > self.config.threshold;

        let reasons = if reasons.is_empty() { vec![LOW_RISK_REASON.to_owned()] } else { reasons };
        let (fraud_probability, risk_score) = round_risk(risk);

        tracing::debug!(
            transaction_id = %tx.transaction_id,
            rules_fired = fired,
            risk,
            is_fraud,
            "scorer.score"
        );

        FraudAssessment {
            transaction_id: tx.transaction_id.clone(),
            is_fraud,
            fraud_probability,
            risk_score,
            reasons,
            timestamp,
        }
    }
}

/// Force a jitter draw into `[0, jitter_max)`. Non-finite draws count as `0`.
fn bounded_jitter(sample: f64, jitter_max: f64) -> f64 {
    if !sample.is_finite() || jitter_max <= 0.0 {
        return 0.0;
    }
    // Strictly below `jitter_max` for any positive normal bound.
    let ceiling = jitter_max * (1.0 - f64::EPSILON);
    sample.clamp(0.0, ceiling)
}

/// Round `risk` to `(probability to 3 decimals, percentage to 1 decimal)`.
///
/// Both come from the same rounded thousandths so they never disagree.
fn round_risk(risk: f64) -> (f64, f64) {
    let thousandths = (risk * 1000.0).round();
    (thousandths / 1000.0, thousandths / 10.0)
}
