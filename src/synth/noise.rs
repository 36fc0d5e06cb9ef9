//! Gaussian white noise
//!
//! The random source is injected so tests can pin the noise with a seed while
//! the default run stays unseeded.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of standard-normal noise samples
#[derive(Debug, Clone)]
pub struct NoiseSource {
    rng: StdRng,
}

impl NoiseSource {
    /// Deterministic source: the same seed always yields the same noise
    pub fn seeded(seed: u64) -> Self {
        NoiseSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system; differs on every call
    pub fn from_entropy() -> Self {
        NoiseSource {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// One draw from N(0, 1) using the Box-Muller transform
    ///
    /// ```text
    /// z = sqrt(-2 ln u1) * cos(2 pi u2),  u1 in (0, 1], u2 in [0, 1)
    /// ```
    pub fn standard_normal(&mut self) -> f64 {
        // random::<f64>() is in [0, 1); flip it so ln never sees zero
        let u1 = 1.0 - self.rng.random::<f64>();
        let u2 = self.rng.random::<f64>();

        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// `num_samples` independent N(0, 1) draws scaled by `amplitude`
    pub fn gaussian_noise(&mut self, num_samples: usize, amplitude: f64) -> Vec<f64> {
        (0..num_samples)
            .map(|_| self.standard_normal() * amplitude)
            .collect()
    }
}
