//! Loss analysis results
//!
//! A [`LossReport`] is what both generators return: the sampled curve plus
//! the rounded statistics used to annotate a chart. Reports are plain data
//! and serialize directly to YAML/JSON.

use serde::{Deserialize, Serialize};

use crate::core::curve::LossCurve;

/// Which loss function produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LossVariant {
    /// Symmetric loss bounded by LSL and USL
    TwoSided,
    /// Loss bounded by a target and a single specification limit
    OneSided,
}

impl std::fmt::Display for LossVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LossVariant::TwoSided => write!(f, "two-sided"),
            LossVariant::OneSided => write!(f, "one-sided"),
        }
    }
}

/// Specification bounds as they were analysed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SpecBounds {
    TwoSided { lsl: f64, usl: f64 },
    OneSided { target: f64, limit: f64 },
}

impl SpecBounds {
    /// Vertical reference lines worth marking on a chart
    pub fn markers(&self) -> Vec<(&'static str, f64)> {
        match *self {
            SpecBounds::TwoSided { lsl, usl } => vec![("LSL", lsl), ("USL", usl)],
            SpecBounds::OneSided { target, limit } => vec![("T", target), ("SL", limit)],
        }
    }
}

/// Rounded summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossStatistics {
    pub mean: f64,

    /// Standard deviation ("s")
    pub std_dev: f64,

    /// Expected loss under a normal approximation: k·s² + (mean − target)²
    pub average_loss: f64,

    /// Loss curve evaluated at the mean (a loss value, not a derivative)
    pub slope_at_mean: f64,
}

/// One labelled row of the statistics table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub label: &'static str,
    pub value: f64,
}

impl LossStatistics {
    /// Table rows in display order: Mean, s, Average Loss, Slope at Mean
    pub fn rows(&self) -> Vec<StatRow> {
        vec![
            StatRow {
                label: "Mean",
                value: self.mean,
            },
            StatRow {
                label: "s",
                value: self.std_dev,
            },
            StatRow {
                label: "Average Loss",
                value: self.average_loss,
            },
            StatRow {
                label: "Slope at Mean",
                value: self.slope_at_mean,
            },
        ]
    }
}

/// Complete output of a loss generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossReport {
    pub variant: LossVariant,
    pub bounds: SpecBounds,
    pub target: f64,
    pub tolerance: f64,
    pub k: f64,
    pub precision: u32,
    pub statistics: LossStatistics,
    pub curve: LossCurve,
}
