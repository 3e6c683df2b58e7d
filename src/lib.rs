//! qloss: Taguchi quality-loss curves
//!
//! Computes two-sided and one-sided quadratic loss curves for a set of
//! measurements against specification limits, with the summary statistics
//! (mean, s, average loss, loss at the mean) used to annotate a chart.
//!
//! The numeric core lives in [`core`] and is free of terminal I/O; [`cli`]
//! renders reports as tables, YAML/JSON/CSV and braille charts.

pub mod cli;
pub mod core;
