// Rust guideline compliant 2026-10-19

//! Adapters (secondary ports) for the fraud service.
//!
//! Each sub-module implements the `domain::JitterSource` port.
//! [`ConfiguredJitter`] selects one of them at startup from configuration.

pub mod fixed_jitter;
pub mod uniform_jitter;

use domain::JitterSource;
use fixed_jitter::FixedJitter;
use uniform_jitter::UniformJitter;

/// Jitter adapter chosen from configuration at startup.
#[derive(Debug)]
pub enum ConfiguredJitter {
    /// Uniform random draws (OS-seeded or seeded).
    Uniform(UniformJitter),
    /// A constant offset, for reproducible scoring.
    Fixed(FixedJitter),
}

impl JitterSource for ConfiguredJitter {
    fn sample(&self, max: f64) -> f64 {
        match self {
            Self::Uniform(jitter) => jitter.sample(max),
            Self::Fixed(jitter) => jitter.sample(max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::float_cmp, reason = "fixed value is returned verbatim")]
    fn fixed_variant_delegates() {
        let jitter = ConfiguredJitter::Fixed(FixedJitter::new(0.05));
        assert_eq!(jitter.sample(0.2), 0.05);
    }

    #[test]
    fn uniform_variant_delegates() {
        let jitter = ConfiguredJitter::Uniform(UniformJitter::new(Some(3)));
        let value = jitter.sample(0.2);
        assert!((0.0..0.2).contains(&value));
    }
}
