//! CLI command implementations

pub mod completions;
pub mod config;
pub mod one_sided;
pub mod two_sided;

use miette::Result;

use crate::cli::args::ChartArgs;
use crate::cli::output::{effective_format, print_report};
use crate::cli::viz::{render_loss_chart, ChartOptions};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, LossReport};

/// Print a report and, for table output, the requested chart
fn emit(
    report: &LossReport,
    samples: &[f64],
    global: &GlobalOpts,
    show_curve: bool,
    config: &Config,
    chart: &ChartArgs,
) -> Result<()> {
    print_report(report, global.format, show_curve)?;

    if chart.plot {
        if effective_format(global.format) == OutputFormat::Table {
            let options = ChartOptions::resolve(&config.chart, chart);
            println!();
            println!("{}", render_loss_chart(report, samples, &options));
        } else {
            log::warn!("--plot is only rendered with table output");
        }
    }
    Ok(())
}
