//! `qloss two-sided` command - symmetric loss between LSL and USL

use miette::Result;

use crate::cli::args::ChartArgs;
use crate::cli::commands::emit;
use crate::cli::input::{load_samples, SampleArgs};
use crate::cli::GlobalOpts;
use crate::core::{two_sided_loss, Config, TwoSidedOptions, TwoSidedSpec};

#[derive(clap::Args, Debug)]
pub struct TwoSidedArgs {
    /// Upper specification limit
    #[arg(long, allow_negative_numbers = true)]
    pub usl: f64,

    /// Lower specification limit
    #[arg(long, allow_negative_numbers = true)]
    pub lsl: f64,

    /// Scale constant for the variance term of the average loss
    #[arg(long, short = 'k')]
    pub k: Option<f64>,

    /// Decimal places for target and statistics
    #[arg(long, short = 'P')]
    pub precision: Option<u32>,

    /// Margin plotted beyond each limit
    #[arg(long, short = 'b')]
    pub buffer: Option<f64>,

    /// Number of points sampled along the curve
    #[arg(long)]
    pub points: Option<usize>,

    /// Include the loss curve table in table output
    #[arg(long)]
    pub curve: bool,

    #[command(flatten)]
    pub samples: SampleArgs,

    #[command(flatten)]
    pub chart: ChartArgs,
}

impl TwoSidedArgs {
    /// Flags over configured defaults
    pub fn options(&self, defaults: &TwoSidedOptions) -> TwoSidedOptions {
        TwoSidedOptions {
            k: self.k.unwrap_or(defaults.k),
            precision: self.precision.unwrap_or(defaults.precision),
            buffer: self.buffer.unwrap_or(defaults.buffer),
            points: self.points.unwrap_or(defaults.points),
        }
    }
}

/// Run the two-sided analysis
pub fn run(args: TwoSidedArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let spec = TwoSidedSpec::new(args.lsl, args.usl)?;
    let options = args.options(&config.two_sided);
    let samples = load_samples(&args.samples)?;

    let report = two_sided_loss(&samples, &spec, &options)?;
    log::info!(
        "two-sided: {} samples, mean={} average loss={}",
        samples.len(),
        report.statistics.mean,
        report.statistics.average_loss
    );

    emit(&report, &samples, global, args.curve, &config, &args.chart)
}
