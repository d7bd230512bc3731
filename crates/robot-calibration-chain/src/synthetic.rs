//! Deterministic synthetic chains for tests and examples.
//!
//! The noise here avoids `thread_rng` and RNG internals so perturbed fixtures
//! stay identical across versions and platforms.

use robot_calibration_core::Real;
use std::f64::consts::FRAC_PI_2;

/// Nominal MDH table of a PUMA 560-like 6-DOF arm, `[alpha, a, theta, d]` per row.
pub fn puma560_mdh() -> Vec<Real> {
    vec![
        0.0, 0.0, 0.0, 0.0, //
        -FRAC_PI_2, 0.0, 0.0, 0.2435, //
        0.0, 0.4318, 0.0, -0.0934, //
        FRAC_PI_2, -0.0203, 0.0, 0.4331, //
        -FRAC_PI_2, 0.0, 0.0, 0.0, //
        FRAC_PI_2, 0.0, 0.0, 0.0,
    ]
}

/// Deterministic uniform parameter noise in `[-max_abs, +max_abs]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParamNoise {
    /// Base seed controlling the pseudo-random sequence.
    pub seed: u64,
    /// Maximum absolute noise per parameter.
    pub max_abs: Real,
}

impl ParamNoise {
    /// Sample the noise for parameter `idx`.
    #[inline]
    pub fn sample(&self, idx: usize) -> Real {
        let max_abs = self.max_abs.abs();
        if max_abs == 0.0 {
            return 0.0;
        }
        let key = self.seed ^ (idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let u = u64_to_unit_f64(splitmix64(key));
        (u - 0.5) * 2.0 * max_abs
    }

    /// Add noise to every entry of a parameter vector.
    pub fn perturb(&self, params: &[Real]) -> Vec<Real> {
        params
            .iter()
            .enumerate()
            .map(|(idx, &p)| p + self.sample(idx))
            .collect()
    }
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[inline]
fn u64_to_unit_f64(x: u64) -> Real {
    // Top 53 bits -> [0, 1).
    (x >> 11) as Real * (1.0 / (1u64 << 53) as Real)
}
