// Rust guideline compliant 2026-10-19

//! Uniform random adapter for the `JitterSource` port.
//!
//! Draws from `[0, max)` with a shared `StdRng`. Supports seeded randomness
//! for reproducible runs; unseeded instances draw their seed from the OS.

use std::sync::{Mutex, PoisonError};

use domain::JitterSource;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Production adapter for the `domain::JitterSource` port.
///
/// One generator is shared by every request; the mutex keeps concurrent draws
/// from interleaving inside the generator state.
#[derive(Debug)]
pub struct UniformJitter {
    rng: Mutex<StdRng>,
}

impl UniformJitter {
    /// Create a new uniform jitter source.
    ///
    /// `seed = Some(s)` produces a deterministic sequence; `None` seeds from the OS.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng: Mutex::new(rng) }
    }
}

impl JitterSource for UniformJitter {
    /// Draw from `[0, max)`. Non-positive or non-finite `max` yields `0.0`.
    fn sample(&self, max: f64) -> f64 {
        if !max.is_finite() || max <= 0.0 {
            return 0.0;
        }
        // A panic while holding the lock cannot leave StdRng half-updated.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0.0..max)
    }
}
