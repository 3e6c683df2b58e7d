//! Output formatting utilities

use console::style;
use miette::{IntoDiagnostic, Result};
use std::io;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::OutputFormat;
use crate::core::{LossReport, SpecBounds, MAX_PRECISION};

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat) -> OutputFormat {
    match format {
        OutputFormat::Auto => OutputFormat::Table,
        other => other,
    }
}

/// Format a value with the report's precision
pub fn format_value(value: f64, precision: u32) -> String {
    format!("{:.*}", precision.min(MAX_PRECISION) as usize, value)
}

#[derive(Tabled)]
struct StatLine {
    #[tabled(rename = "Statistic")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct CurveLine {
    #[tabled(rename = "x")]
    x: String,
    #[tabled(rename = "Loss")]
    y: String,
}

/// One-line description of the analysed specification
pub fn report_heading(report: &LossReport) -> String {
    let bounds = match report.bounds {
        SpecBounds::TwoSided { lsl, usl } => format!(
            "LSL={}  USL={}  target={}",
            lsl,
            usl,
            format_value(report.target, report.precision)
        ),
        SpecBounds::OneSided { target, limit } => format!("target={}  limit={}", target, limit),
    };
    format!(
        "{} loss  {}  tolerance={}  k={}",
        capitalize(&report.variant.to_string()),
        bounds,
        report.tolerance,
        report.k
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Statistics table: Mean, s, Average Loss, Slope at Mean
pub fn render_stats_table(report: &LossReport) -> String {
    let rows: Vec<StatLine> = report
        .statistics
        .rows()
        .into_iter()
        .map(|row| StatLine {
            label: row.label,
            value: format_value(row.value, report.precision),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Loss curve as an (x, loss) table
pub fn render_curve_table(report: &LossReport) -> String {
    let rows: Vec<CurveLine> = report
        .curve
        .points()
        .iter()
        .map(|p| CurveLine {
            x: format!("{:.4}", p.x),
            y: format!("{:.4}", p.y),
        })
        .collect();
    Table::new(rows).with(Style::psql()).to_string()
}

/// Write the loss curve as CSV
pub fn write_curve_csv<W: io::Write>(report: &LossReport, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["x", "loss"]).into_diagnostic()?;
    for point in report.curve.points() {
        wtr.write_record([point.x.to_string(), point.y.to_string()])
            .into_diagnostic()?;
    }
    wtr.flush().into_diagnostic()?;
    Ok(())
}

/// Print a report in the requested format
///
/// `show_curve` adds the curve table to table output; YAML and JSON always
/// carry the full report.
pub fn print_report(report: &LossReport, format: OutputFormat, show_curve: bool) -> Result<()> {
    match effective_format(format) {
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(report).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            write_curve_csv(report, io::stdout().lock())?;
        }
        OutputFormat::Table | OutputFormat::Auto => {
            println!("{}", style(report_heading(report)).bold());
            println!("{}", render_stats_table(report));
            if show_curve {
                println!();
                println!(
                    "{} ({} points)",
                    style("Loss Curve").bold(),
                    report.curve.len()
                );
                println!("{}", render_curve_table(report));
            }
        }
    }
    Ok(())
}
