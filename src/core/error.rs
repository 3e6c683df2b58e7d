//! Error types for loss-curve computation

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the loss-curve generators
///
/// Every variant is raised before any curve or statistic is computed,
/// so callers never see partial output.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum LossError {
    #[error("Invalid range: {upper_name} ({upper}) must be greater than {lower_name} ({lower})")]
    #[diagnostic(
        code(qloss::invalid_range),
        help("swap the bounds or widen the specification")
    )]
    InvalidRange {
        lower_name: &'static str,
        lower: f64,
        upper_name: &'static str,
        upper: f64,
    },

    #[error("Sample set is empty: mean and standard deviation are undefined")]
    #[diagnostic(
        code(qloss::empty_sample),
        help("provide at least one observation via --data, --values or --simulate")
    )]
    EmptySample,

    #[error("Non-finite input: {field} is {value}")]
    #[diagnostic(
        code(qloss::non_finite),
        help("remove NaN or infinite values from the input")
    )]
    NonFiniteInput { field: String, value: f64 },

    #[error("Invalid option: {0}")]
    #[diagnostic(code(qloss::invalid_option))]
    InvalidOption(String),
}

/// Result alias for the numeric core
pub type LossResult<T> = std::result::Result<T, LossError>;

/// Reject a non-finite scalar input
pub(crate) fn ensure_finite(field: &str, value: f64) -> LossResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LossError::NonFiniteInput {
            field: field.to_string(),
            value,
        })
    }
}

/// Reject an empty sample set or one holding non-finite observations
pub(crate) fn ensure_samples(samples: &[f64]) -> LossResult<()> {
    if samples.is_empty() {
        return Err(LossError::EmptySample);
    }
    if let Some((i, &value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(LossError::NonFiniteInput {
            field: format!("sample[{}]", i),
            value,
        });
    }
    Ok(())
}
