//! Sampled loss curves

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_finite, LossError, LossResult};

/// Default number of points sampled along a loss curve
pub const DEFAULT_POINTS: usize = 500;

/// `count` evenly spaced values over `[start, end]`, both endpoints included
///
/// The last value is pinned to `end` so floating-point drift never moves
/// the domain boundary.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// A single (x, loss) sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Loss evaluated over an evenly spaced domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossCurve {
    points: Vec<CurvePoint>,
}

impl LossCurve {
    /// Sample `loss` at `count` points over `[start, end]`
    pub fn sample<F>(start: f64, end: f64, count: usize, loss: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let points = linspace(start, end, count)
            .into_iter()
            .map(|x| CurvePoint { x, y: loss(x) })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Domain covered by the curve, `None` when empty
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.x, self.points.last()?.x))
    }

    /// Largest loss value on the curve
    pub fn max_loss(&self) -> Option<f64> {
        self.ys().reduce(f64::max)
    }
}

/// Check a curve resolution option
pub(crate) fn ensure_points(points: usize) -> LossResult<()> {
    if points < 2 {
        return Err(LossError::InvalidOption(format!(
            "curve needs at least 2 points, got {}",
            points
        )));
    }
    Ok(())
}

/// Check a margin/buffer option
pub(crate) fn ensure_margin(name: &str, value: f64) -> LossResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LossError::InvalidOption(format!(
            "{} must be a finite, non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Check that a curve domain and its width are representable
pub(crate) fn ensure_domain(start: f64, end: f64) -> LossResult<()> {
    ensure_finite("curve start", start)?;
    ensure_finite("curve end", end)?;
    ensure_finite("curve width", end - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(8.0, 22.0, 500);
        assert_eq!(xs.len(), 500);
        assert_eq!(xs[0], 8.0);
        assert_eq!(xs[499], 22.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_sample_curve() {
        let curve = LossCurve::sample(-1.0, 1.0, 5, |x| x * x);
        assert_eq!(curve.len(), 5);
        assert_eq!(curve.domain(), Some((-1.0, 1.0)));
        assert_eq!(curve.max_loss(), Some(1.0));
        assert_eq!(curve.points()[2], CurvePoint { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_option_checks() {
        assert!(ensure_points(2).is_ok());
        assert!(ensure_points(1).is_err());
        assert!(ensure_margin("buffer", 0.0).is_ok());
        assert!(ensure_margin("buffer", -1.0).is_err());
        assert!(ensure_margin("buffer", f64::NAN).is_err());
    }

    #[test]
    fn test_domain_overflow_rejected() {
        assert!(ensure_domain(8.0, 22.0).is_ok());
        assert!(matches!(
            ensure_domain(-f64::MAX, f64::MAX),
            Err(LossError::NonFiniteInput { .. })
        ));
        assert!(ensure_domain(f64::MAX, f64::INFINITY).is_err());
    }
}
