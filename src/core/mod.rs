//! Core module - loss functions, statistics and configuration

pub mod config;
pub mod curve;
pub mod density;
pub mod error;
pub mod one_sided;
pub mod report;
pub mod simulate;
pub mod stats;
pub mod two_sided;

pub use config::{ChartConfig, Config};
pub use curve::{linspace, CurvePoint, LossCurve, DEFAULT_POINTS};
pub use density::{kde, Bandwidth, DensityCurve};
pub use error::{LossError, LossResult};
pub use one_sided::{one_sided_loss, OneSidedOptions, OneSidedSpec};
pub use report::{LossReport, LossStatistics, LossVariant, SpecBounds, StatRow};
pub use simulate::simulate_normal;
pub use stats::{round_to, SampleSummary, MAX_PRECISION};
pub use two_sided::{two_sided_loss, TwoSidedLoss, TwoSidedOptions, TwoSidedSpec};
