//! Gaussian kernel density estimate for the sample overlay
//!
//! f̂(x) = (1/nh) Σᵢ K((x − xᵢ)/h), K the standard normal kernel.
//! The evaluation grid extends 3h beyond the data on both sides.

use serde::{Deserialize, Serialize};

use crate::core::curve::linspace;
use crate::core::stats::sample_std_dev;

/// Bandwidth selection rule
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bandwidth {
    /// h = 1.06 · σ · n^(-1/5)
    #[default]
    Scott,
    /// h = 0.9 · min(σ, IQR/1.34) · n^(-1/5)
    Silverman,
    /// Fixed bandwidth
    Manual(f64),
}

/// Evaluated density curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    pub x: Vec<f64>,
    pub density: Vec<f64>,
    pub bandwidth: f64,
}

impl DensityCurve {
    pub fn max_density(&self) -> f64 {
        self.density.iter().cloned().fold(0.0, f64::max)
    }
}

/// Resolve a bandwidth rule to a positive value
///
/// `None` below two observations, for non-finite data, or when the data
/// has no spread.
pub fn bandwidth(samples: &[f64], rule: Bandwidth) -> Option<f64> {
    let n = samples.len();
    if n < 2 || samples.iter().any(|v| !v.is_finite()) {
        return None;
    }
    let h = match rule {
        Bandwidth::Scott => 1.06 * sample_std_dev(samples)? * (n as f64).powf(-0.2),
        Bandwidth::Silverman => {
            let sd = sample_std_dev(samples)?;
            let iqr = quantile(samples, 0.75)? - quantile(samples, 0.25)?;
            let spread = if iqr > 0.0 { sd.min(iqr / 1.34) } else { sd };
            0.9 * spread * (n as f64).powf(-0.2)
        }
        Bandwidth::Manual(h) => h,
    };
    (h.is_finite() && h > 1e-300).then_some(h)
}

/// Linear-interpolation quantile (R-7)
fn quantile(samples: &[f64], q: f64) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Gaussian KDE of `samples` on `points` grid positions
pub fn kde(samples: &[f64], rule: Bandwidth, points: usize) -> Option<DensityCurve> {
    if points < 2 {
        return None;
    }
    let h = bandwidth(samples, rule)?;
    let min = samples.iter().cloned().reduce(f64::min)?;
    let max = samples.iter().cloned().reduce(f64::max)?;
    let x = linspace(min - 3.0 * h, max + 3.0 * h, points);
    let density = x.iter().map(|&xi| evaluate(samples, h, xi)).collect();
    log::trace!("kde: n={} bandwidth={:.6}", samples.len(), h);
    Some(DensityCurve {
        x,
        density,
        bandwidth: h,
    })
}

fn evaluate(samples: &[f64], h: f64, x: f64) -> f64 {
    let inv_h = 1.0 / h;
    let norm = inv_h / samples.len() as f64 / (2.0 * std::f64::consts::PI).sqrt();
    samples
        .iter()
        .map(|&xi| {
            let u = (x - xi) * inv_h;
            (-0.5 * u * u).exp()
        })
        .sum::<f64>()
        * norm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kde_integrates_to_one() {
        let data = [1.0, 1.1, 1.2, 2.0, 2.1, 2.2, 5.0];
        let result = kde(&data, Bandwidth::Scott, 512).unwrap();
        assert_eq!(result.x.len(), 512);
        let dx = result.x[1] - result.x[0];
        let integral: f64 = result.density.iter().sum::<f64>() * dx;
        assert!((integral - 1.0).abs() < 0.05, "integral = {}", integral);
    }

    #[test]
    fn test_kde_degenerate_inputs() {
        assert!(kde(&[1.0], Bandwidth::Scott, 100).is_none());
        assert!(kde(&[2.0, 2.0, 2.0], Bandwidth::Scott, 100).is_none());
        assert!(kde(&[1.0, 2.0], Bandwidth::Scott, 1).is_none());
        assert!(kde(&[1.0, f64::NAN], Bandwidth::Scott, 100).is_none());
    }

    #[test]
    fn test_manual_bandwidth() {
        let result = kde(&[0.0, 1.0], Bandwidth::Manual(0.5), 10).unwrap();
        assert_eq!(result.bandwidth, 0.5);
        assert_eq!(result.x[0], -1.5);
        assert_eq!(result.x[9], 2.5);
        assert!(kde(&[0.0, 1.0], Bandwidth::Manual(0.0), 10).is_none());
    }

    #[test]
    fn test_silverman_not_wider_than_scott() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 50.0];
        let scott = bandwidth(&data, Bandwidth::Scott).unwrap();
        let silverman = bandwidth(&data, Bandwidth::Silverman).unwrap();
        assert!(silverman < scott);
    }

    #[test]
    fn test_density_peaks_near_mode() {
        let data = [0.0, 0.1, -0.1, 0.05, -0.05];
        let result = kde(&data, Bandwidth::Scott, 201).unwrap();
        let peak = result
            .density
            .iter()
            .cloned()
            .enumerate()
            .fold((0, 0.0), |acc, (i, d)| if d > acc.1 { (i, d) } else { acc });
        assert!(result.x[peak.0].abs() < 0.05);
        assert_eq!(result.max_density(), peak.1);
    }
}
