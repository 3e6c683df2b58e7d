//! Descriptive statistics shared by both loss generators

use crate::core::error::{ensure_finite, ensure_samples, LossError, LossResult};

/// Most decimal places an f64 statistic can meaningfully carry
pub const MAX_PRECISION: u32 = 15;

/// Round `value` to `precision` decimal places (half away from zero)
pub fn round_to(value: f64, precision: u32) -> f64 {
    // 10^308 is the largest finite power of ten
    let factor = 10f64.powi(precision.min(308) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        // Too many decimals to scale; value is already as precise as f64 allows
        return value;
    }
    scaled.round() / factor
}

/// Check a decimal precision option
pub(crate) fn ensure_precision(precision: u32) -> LossResult<()> {
    if precision > MAX_PRECISION {
        return Err(LossError::InvalidOption(format!(
            "precision must be at most {} decimal places, got {}",
            MAX_PRECISION, precision
        )));
    }
    Ok(())
}

/// Arithmetic mean; `None` for an empty slice
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation (divisor n); `None` for an empty slice
///
/// A single observation has zero spread.
pub fn std_dev(samples: &[f64]) -> Option<f64> {
    let mu = mean(samples)?;
    let ss: f64 = samples.iter().map(|x| (x - mu).powi(2)).sum();
    Some((ss / samples.len() as f64).sqrt())
}

/// Sample standard deviation (divisor n - 1); `None` below two observations
pub fn sample_std_dev(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let mu = mean(samples)?;
    let ss: f64 = samples.iter().map(|x| (x - mu).powi(2)).sum();
    Some((ss / (samples.len() - 1) as f64).sqrt())
}

/// Rounded location and spread of a sample set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub mean: f64,
    pub std_dev: f64,
}

impl SampleSummary {
    /// Validate `samples` and summarise them at `precision` decimals
    pub fn from_samples(samples: &[f64], precision: u32) -> LossResult<Self> {
        ensure_samples(samples)?;
        // ensure_samples guarantees a non-empty, finite slice
        let mean = mean(samples).unwrap_or_default();
        let std_dev = std_dev(samples).unwrap_or_default();
        ensure_finite("sample mean", mean)?;
        ensure_finite("sample standard deviation", std_dev)?;
        Ok(Self {
            mean: round_to(mean, precision),
            std_dev: round_to(std_dev, precision),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LossError;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(-1.25, 1), -1.3);
        assert_eq!(round_to(15.04, 1), 15.0);
        assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
        assert_eq!(round_to(7.6, 0), 8.0);
    }

    #[test]
    fn test_round_to_huge_precision_passthrough() {
        assert_eq!(round_to(1.5e300, 20), 1.5e300);
    }

    #[test]
    fn test_round_to_out_of_range_precision() {
        assert_eq!(round_to(15.04, u32::MAX), 15.04);
        assert_eq!(round_to(15.0, 1 << 31), 15.0);
    }

    #[test]
    fn test_ensure_precision() {
        assert!(ensure_precision(0).is_ok());
        assert!(ensure_precision(MAX_PRECISION).is_ok());
        assert!(matches!(
            ensure_precision(MAX_PRECISION + 1),
            Err(LossError::InvalidOption(_))
        ));
        assert!(ensure_precision(u32::MAX).is_err());
    }

    #[test]
    fn test_summary_rejects_overflowing_mean() {
        assert!(matches!(
            SampleSummary::from_samples(&[f64::MAX, f64::MAX], 1),
            Err(LossError::NonFiniteInput { .. })
        ));
    }

    #[test]
    fn test_mean_and_std_dev() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&v), Some(5.0));
        assert!((std_dev(&v).unwrap() - 2.0).abs() < 1e-12);
        assert!((sample_std_dev(&v).unwrap() - 2.138089935299395).abs() < 1e-10);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(mean(&[]), None);
        assert_eq!(std_dev(&[]), None);
        assert_eq!(std_dev(&[3.0]), Some(0.0));
        assert_eq!(sample_std_dev(&[3.0]), None);
    }

    #[test]
    fn test_summary_rounds() {
        let summary = SampleSummary::from_samples(&[1.0, 2.0, 2.0], 2).unwrap();
        assert_eq!(summary.mean, 1.67);
        assert_eq!(summary.std_dev, 0.47);
    }

    #[test]
    fn test_summary_rejects_empty() {
        assert_eq!(
            SampleSummary::from_samples(&[], 1),
            Err(LossError::EmptySample)
        );
    }
}
