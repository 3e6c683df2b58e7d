//! Synthetic normally distributed samples
//!
//! Used to explore a loss curve before real measurements exist.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::error::{ensure_finite, LossError, LossResult};

/// Draw `n` samples from N(mean, std_dev²)
///
/// With a seed the draw is reproducible; without one the generator is
/// seeded from the OS.
pub fn simulate_normal(mean: f64, std_dev: f64, n: usize, seed: Option<u64>) -> LossResult<Vec<f64>> {
    ensure_finite("simulated mean", mean)?;
    ensure_finite("simulated standard deviation", std_dev)?;
    if std_dev < 0.0 {
        return Err(LossError::InvalidOption(format!(
            "simulated standard deviation must be non-negative, got {}",
            std_dev
        )));
    }
    if n == 0 {
        return Err(LossError::InvalidOption(
            "simulated sample count must be at least 1".to_string(),
        ));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    log::debug!("simulating {} samples from N({}, {}²), seed={:?}", n, mean, std_dev, seed);

    Ok((0..n)
        .map(|_| {
            // Box-Muller; u1 in (0, 1] keeps ln finite
            let u1: f64 = 1.0 - rng.random::<f64>();
            let u2: f64 = rng.random();
            let z = (-2.0_f64 * u1.ln()).sqrt() * (2.0_f64 * std::f64::consts::PI * u2).cos();
            mean + std_dev * z
        })
        .collect())
}
