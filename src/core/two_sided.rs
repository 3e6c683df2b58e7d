//! Two-sided (nominal-is-best) quality loss
//!
//! Loss grows quadratically as the characteristic moves away from the
//! target, which sits midway between LSL and USL. Outside the
//! specification the loss is capped at its boundary value:
//!
//! ```text
//!   L(x) = T·(target − LSL)²   for x ≤ LSL
//!   L(x) = T·(x − target)²     for LSL < x < USL
//!   L(x) = T·(USL − target)²   for x ≥ USL
//! ```
//!
//! where T = USL − LSL is the tolerance.

use serde::{Deserialize, Serialize};

use crate::core::curve::{ensure_domain, ensure_margin, ensure_points, LossCurve, DEFAULT_POINTS};
use crate::core::error::{ensure_finite, LossError, LossResult};
use crate::core::report::{LossReport, LossStatistics, LossVariant, SpecBounds};
use crate::core::stats::{ensure_precision, round_to, SampleSummary};

/// Upper and lower specification limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoSidedSpec {
    pub lsl: f64,
    pub usl: f64,
}

impl TwoSidedSpec {
    /// Validate the limits: both finite and USL > LSL
    pub fn new(lsl: f64, usl: f64) -> LossResult<Self> {
        ensure_finite("LSL", lsl)?;
        ensure_finite("USL", usl)?;
        if usl <= lsl {
            return Err(LossError::InvalidRange {
                lower_name: "LSL",
                lower: lsl,
                upper_name: "USL",
                upper: usl,
            });
        }
        Ok(Self { lsl, usl })
    }

    pub fn tolerance(&self) -> f64 {
        self.usl - self.lsl
    }

    /// Midpoint of the limits rounded to `precision`
    pub fn target(&self, precision: u32) -> f64 {
        round_to(self.lsl + self.tolerance() / 2.0, precision)
    }

    /// Loss function with its target fixed at `precision`
    pub fn loss_function(&self, precision: u32) -> TwoSidedLoss {
        TwoSidedLoss {
            lsl: self.lsl,
            usl: self.usl,
            target: self.target(precision),
            tolerance: self.tolerance(),
        }
    }
}

/// Evaluable two-sided loss function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoSidedLoss {
    pub lsl: f64,
    pub usl: f64,
    pub target: f64,
    pub tolerance: f64,
}

impl TwoSidedLoss {
    /// Loss at `x`; flat outside the limits
    pub fn loss_at(&self, x: f64) -> f64 {
        if x <= self.lsl {
            self.tolerance * (self.target - self.lsl).powi(2)
        } else if x >= self.usl {
            self.tolerance * (self.usl - self.target).powi(2)
        } else {
            self.tolerance * (x - self.target).powi(2)
        }
    }

    /// Loss at the sample mean
    ///
    /// A mean on or outside either limit reports 0. Note this differs from
    /// `loss_at`, which keeps the boundary value there.
    pub fn slope_at_mean(&self, mean: f64) -> f64 {
        if mean <= self.lsl || mean >= self.usl {
            0.0
        } else {
            self.tolerance * (mean - self.target).powi(2)
        }
    }
}

/// Numeric options for the two-sided generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoSidedOptions {
    /// Scale constant applied to the variance in the average loss
    pub k: f64,

    /// Decimal places for target and statistics
    pub precision: u32,

    /// Margin added beyond both limits for the plotting domain
    pub buffer: f64,

    /// Number of curve samples
    pub points: usize,
}

impl Default for TwoSidedOptions {
    fn default() -> Self {
        Self {
            k: 1.0,
            precision: 1,
            buffer: 2.0,
            points: DEFAULT_POINTS,
        }
    }
}

impl TwoSidedOptions {
    fn validate(&self) -> LossResult<()> {
        ensure_k(self.k)?;
        ensure_precision(self.precision)?;
        ensure_margin("buffer", self.buffer)?;
        ensure_points(self.points)
    }
}

pub(crate) fn ensure_k(k: f64) -> LossResult<()> {
    if !k.is_finite() || k < 0.0 {
        return Err(LossError::InvalidOption(format!(
            "k must be a finite, non-negative number, got {}",
            k
        )));
    }
    Ok(())
}

/// Compute the two-sided loss curve and statistics for `samples`
pub fn two_sided_loss(
    samples: &[f64],
    spec: &TwoSidedSpec,
    options: &TwoSidedOptions,
) -> LossResult<LossReport> {
    // Fields are public, so a literal TwoSidedSpec may have skipped new()
    let spec = TwoSidedSpec::new(spec.lsl, spec.usl)?;
    options.validate()?;
    let summary = SampleSummary::from_samples(samples, options.precision)?;

    let loss = spec.loss_function(options.precision);
    ensure_finite("tolerance", loss.tolerance)?;
    ensure_finite("loss at LSL", loss.loss_at(spec.lsl))?;
    ensure_finite("loss at USL", loss.loss_at(spec.usl))?;
    let (start, end) = (spec.lsl - options.buffer, spec.usl + options.buffer);
    ensure_domain(start, end)?;

    let p = options.precision;
    let average_loss = round_to(
        options.k * summary.std_dev.powi(2) + (summary.mean - loss.target).powi(2),
        p,
    );
    ensure_finite("average loss", average_loss)?;

    log::debug!(
        "two-sided loss: LSL={} USL={} target={} tolerance={} n={}",
        spec.lsl,
        spec.usl,
        loss.target,
        loss.tolerance,
        samples.len()
    );

    let curve = LossCurve::sample(start, end, options.points, |x| loss.loss_at(x));

    let statistics = LossStatistics {
        mean: summary.mean,
        std_dev: summary.std_dev,
        average_loss,
        slope_at_mean: round_to(loss.slope_at_mean(summary.mean), p),
    };

    Ok(LossReport {
        variant: LossVariant::TwoSided,
        bounds: SpecBounds::TwoSided {
            lsl: spec.lsl,
            usl: spec.usl,
        },
        target: loss.target,
        tolerance: loss.tolerance,
        k: options.k,
        precision: p,
        statistics,
        curve,
    })
}
