//! One-sided (smaller-is-better style) quality loss
//!
//! Loss is zero up to the target, grows quadratically toward the single
//! specification limit and is capped beyond it.

use serde::{Deserialize, Serialize};

use crate::core::curve::{ensure_domain, ensure_margin, ensure_points, LossCurve, DEFAULT_POINTS};
use crate::core::error::{ensure_finite, LossError, LossResult};
use crate::core::report::{LossReport, LossStatistics, LossVariant, SpecBounds};
use crate::core::stats::{ensure_precision, round_to, SampleSummary};
use crate::core::two_sided::ensure_k;

/// Target and specification limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneSidedSpec {
    pub target: f64,
    pub limit: f64,
}

impl OneSidedSpec {
    /// Validate the bounds: both finite and limit > target
    pub fn new(target: f64, limit: f64) -> LossResult<Self> {
        ensure_finite("target", target)?;
        ensure_finite("specification limit", limit)?;
        if limit <= target {
            return Err(LossError::InvalidRange {
                lower_name: "target",
                lower: target,
                upper_name: "specification limit",
                upper: limit,
            });
        }
        Ok(Self { target, limit })
    }

    pub fn tolerance(&self) -> f64 {
        self.limit - self.target
    }

    /// Loss at `x`: zero up to the target, capped from the limit on
    pub fn loss_at(&self, x: f64) -> f64 {
        let tolerance = self.tolerance();
        if x >= self.limit {
            tolerance * (self.limit - self.target).powi(2)
        } else if x <= self.target {
            0.0
        } else {
            tolerance * (x - self.target).powi(2).max(0.0)
        }
    }

    /// Loss at the sample mean
    ///
    /// A mean exactly at the limit still takes the quadratic branch; only a
    /// mean strictly beyond it reports 0.
    pub fn slope_at_mean(&self, mean: f64) -> f64 {
        if mean <= self.target || mean > self.limit {
            0.0
        } else {
            self.tolerance() * (mean - self.target).powi(2)
        }
    }
}

/// Numeric options for the one-sided generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneSidedOptions {
    pub k: f64,
    pub precision: u32,

    /// Domain extension below the target
    pub below_margin: f64,

    /// Domain extension past the specification limit
    pub past_margin: f64,

    pub points: usize,
}

impl Default for OneSidedOptions {
    fn default() -> Self {
        Self {
            k: 1.0,
            precision: 1,
            below_margin: 5.0,
            past_margin: 5.0,
            points: DEFAULT_POINTS,
        }
    }
}

impl OneSidedOptions {
    fn validate(&self) -> LossResult<()> {
        ensure_k(self.k)?;
        ensure_precision(self.precision)?;
        ensure_margin("below-target margin", self.below_margin)?;
        ensure_margin("past-spec margin", self.past_margin)?;
        ensure_points(self.points)
    }
}

/// Compute the one-sided loss curve and statistics for `samples`
pub fn one_sided_loss(
    samples: &[f64],
    spec: &OneSidedSpec,
    options: &OneSidedOptions,
) -> LossResult<LossReport> {
    // Fields are public, so a literal OneSidedSpec may have skipped new()
    let spec = OneSidedSpec::new(spec.target, spec.limit)?;
    options.validate()?;
    let summary = SampleSummary::from_samples(samples, options.precision)?;

    let tolerance = spec.tolerance();
    ensure_finite("tolerance", tolerance)?;
    ensure_finite("loss at specification limit", spec.loss_at(spec.limit))?;
    let (start, end) = (
        spec.target - options.below_margin,
        spec.limit + options.past_margin,
    );
    ensure_domain(start, end)?;

    let p = options.precision;
    let average_loss = if summary.mean < spec.target {
        0.0
    } else {
        round_to(
            options.k * summary.std_dev.powi(2) + (summary.mean - spec.target).powi(2),
            p,
        )
    };
    ensure_finite("average loss", average_loss)?;

    log::debug!(
        "one-sided loss: target={} limit={} tolerance={} n={}",
        spec.target,
        spec.limit,
        tolerance,
        samples.len()
    );

    let curve = LossCurve::sample(start, end, options.points, |x| spec.loss_at(x));

    let statistics = LossStatistics {
        mean: summary.mean,
        std_dev: summary.std_dev,
        average_loss,
        slope_at_mean: round_to(spec.slope_at_mean(summary.mean), p),
    };

    Ok(LossReport {
        variant: LossVariant::OneSided,
        bounds: SpecBounds::OneSided {
            target: spec.target,
            limit: spec.limit,
        },
        target: spec.target,
        tolerance,
        k: options.k,
        precision: p,
        statistics,
        curve,
    })
}
