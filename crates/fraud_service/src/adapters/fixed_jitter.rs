// Rust guideline compliant 2026-10-19

//! Constant adapter for the `JitterSource` port.
//!
//! Returns the same offset on every call regardless of the requested range.
//! Used for reproducible deployments and for pinning jitter to zero in tests.

use domain::JitterSource;

/// `JitterSource` adapter that always yields `value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter {
    value: f64,
}

impl FixedJitter {
    /// Create an adapter that always returns `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Adapter that disables jitter.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0)
    }
}

impl Default for FixedJitter {
    fn default() -> Self {
        Self::zero()
    }
}

impl JitterSource for FixedJitter {
    fn sample(&self, _max: f64) -> f64 {
        self.value
    }
}
