//! Terminal visualization using braille graphics
//!
//! Draws the loss curve with the sample density overlaid, vertical markers
//! for the specification bounds and the sample mean, plus optional tick
//! values and a statistics annotation.

use drawille::Canvas;

use crate::cli::args::ChartArgs;
use crate::cli::output::format_value;
use crate::core::{kde, Bandwidth, ChartConfig, LossReport};

/// Number of grid points used for the density overlay
const DENSITY_POINTS: usize = 256;

/// Fraction of the loss axis the density peak is scaled to
const DENSITY_HEIGHT: f64 = 0.8;

/// Resolved chart display options
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub density: bool,
    pub mean_marker: bool,
    pub annotate: bool,
    pub ticks: bool,
    pub bandwidth: Bandwidth,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::resolve(&ChartConfig::default(), &ChartArgs::default())
    }
}

impl ChartOptions {
    /// Configured defaults overridden by command-line flags
    pub fn resolve(config: &ChartConfig, args: &ChartArgs) -> Self {
        Self {
            width: args.width.unwrap_or(config.width).max(8),
            height: args.height.unwrap_or(config.height).max(8),
            density: config.density && !args.no_density,
            mean_marker: config.mean_marker && !args.no_mean,
            annotate: config.annotate && !args.no_annotate,
            ticks: config.ticks && !args.hide_ticks,
            bandwidth: config.bandwidth,
            x_label: args.x_label.clone().or_else(|| config.x_label.clone()),
            y_label: args.y_label.clone().or_else(|| config.y_label.clone()),
        }
    }
}

/// Maps data coordinates onto canvas dots
struct Plot {
    width: u32,
    height: u32,
    x_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Plot {
    fn px(&self, x: f64) -> Option<u32> {
        if x < self.x_min || x > self.x_max {
            return None;
        }
        let t = (x - self.x_min) / (self.x_max - self.x_min);
        Some((t * (self.width - 1) as f64).round() as u32)
    }

    fn py(&self, y: f64) -> u32 {
        let t = (y / self.y_max).clamp(0.0, 1.0);
        ((1.0 - t) * (self.height - 1) as f64).round() as u32
    }

    /// Dotted vertical line; `gap` is the spacing between dots
    fn vline(&self, canvas: &mut Canvas, x: f64, gap: u32) {
        if let Some(px) = self.px(x) {
            for py in (0..self.height).step_by(gap.max(1) as usize) {
                canvas.set(px, py);
            }
        }
    }
}

/// Render the loss chart for a report
///
/// `samples` feeds the density overlay; it is skipped when the samples
/// have no spread.
pub fn render_loss_chart(report: &LossReport, samples: &[f64], options: &ChartOptions) -> String {
    let (x_min, x_max) = match report.curve.domain() {
        Some(domain) => domain,
        None => return "  (empty curve)".to_string(),
    };
    let max_loss = report.curve.max_loss().unwrap_or(0.0);
    let plot = Plot {
        width: options.width,
        height: options.height,
        x_min,
        x_max,
        y_max: if max_loss > 0.0 { max_loss } else { 1.0 },
    };

    let mut canvas = Canvas::new(plot.width, plot.height);

    // Loss curve
    let points: Vec<(u32, u32)> = report
        .curve
        .points()
        .iter()
        .filter_map(|p| plot.px(p.x).map(|px| (px, plot.py(p.y))))
        .collect();
    for pair in points.windows(2) {
        let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
        canvas.line(x1, y1, x2, y2);
    }

    // Density overlay, scaled to share the loss axis
    let mut density_shown = false;
    if options.density {
        if let Some(density) = kde(samples, options.bandwidth, DENSITY_POINTS) {
            let peak = density.max_density();
            if peak > 0.0 {
                for (i, (&x, &d)) in density.x.iter().zip(&density.density).enumerate() {
                    if i % 2 == 1 {
                        continue;
                    }
                    if let Some(px) = plot.px(x) {
                        canvas.set(px, plot.py(d / peak * DENSITY_HEIGHT * plot.y_max));
                    }
                }
                density_shown = true;
            }
        } else {
            log::debug!("density overlay skipped: samples have no spread");
        }
    }

    for (_, x) in report.bounds.markers() {
        plot.vline(&mut canvas, x, 4);
    }

    let mean = report.statistics.mean;
    if options.mean_marker {
        plot.vline(&mut canvas, mean, 2);
    }

    let frame = canvas.frame();
    let rows: Vec<&str> = frame.lines().collect();

    let mut out = Vec::new();
    if let Some(label) = &options.y_label {
        out.push(format!("  {}", label));
    }

    let y_top = format_tick(plot.y_max);
    let gutter = if options.ticks { y_top.len().max(1) } else { 0 };
    for (i, row) in rows.iter().enumerate() {
        let tick = if !options.ticks {
            String::new()
        } else if i == 0 {
            y_top.clone()
        } else if i + 1 == rows.len() {
            "0".to_string()
        } else {
            String::new()
        };
        out.push(format!("{:>width$} ┤{}", tick, row, width = gutter));
    }

    let axis_width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    out.push(format!("{:>width$} └{}", "", "─".repeat(axis_width), width = gutter));

    if options.ticks {
        let left = format_tick(x_min);
        let mid = format_tick((x_min + x_max) / 2.0);
        let right = format_tick(x_max);
        let mut line = vec![' '; axis_width + 2];
        place(&mut line, 0, &left);
        place(&mut line, (axis_width / 2).saturating_sub(mid.len() / 2) + 1, &mid);
        place(&mut line, (axis_width + 2).saturating_sub(right.len()), &right);
        out.push(format!(
            "{:>width$}{}",
            "",
            line.into_iter().collect::<String>().trim_end(),
            width = gutter
        ));
    }

    if let Some(label) = &options.x_label {
        out.push(format!("{:>width$}  {:^axis$}", "", label, width = gutter, axis = axis_width));
    }

    let markers: Vec<String> = report
        .bounds
        .markers()
        .iter()
        .map(|(name, x)| format!("{}={}", name, x))
        .collect();
    let mut legend = format!("  ── loss   ⋮ {}", markers.join(" "));
    if options.mean_marker {
        legend.push_str(&format!("   ┆ mean={}", format_value(mean, report.precision)));
    }
    if density_shown {
        legend.push_str("   ·· density");
    }
    out.push(legend);

    if options.annotate {
        let p = report.precision;
        let stats = report
            .statistics
            .rows()
            .iter()
            .map(|row| format!("{} = {}", row.label, format_value(row.value, p)))
            .collect::<Vec<_>>()
            .join("   ");
        out.push(format!("  {}", stats));
    }

    out.join("\n")
}

/// Compact tick label
fn format_tick(value: f64) -> String {
    if value != 0.0 && (value.abs() >= 1e5 || value.abs() < 1e-2) {
        format!("{:.2e}", value)
    } else if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Write `text` into `line` starting at `start`, clipped to the line
fn place(line: &mut [char], start: usize, text: &str) {
    for (i, c) in text.chars().enumerate() {
        if let Some(slot) = line.get_mut(start + i) {
            *slot = c;
        }
    }
}
