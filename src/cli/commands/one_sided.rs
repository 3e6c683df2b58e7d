//! `qloss one-sided` command - loss from a target up to one specification limit

use miette::Result;

use crate::cli::args::ChartArgs;
use crate::cli::commands::emit;
use crate::cli::input::{load_samples, SampleArgs};
use crate::cli::GlobalOpts;
use crate::core::{one_sided_loss, Config, OneSidedOptions, OneSidedSpec};

#[derive(clap::Args, Debug)]
pub struct OneSidedArgs {
    /// Target (zero-loss) value
    #[arg(long, allow_negative_numbers = true)]
    pub target: f64,

    /// Specification limit (must exceed the target)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: f64,

    /// Scale constant for the variance term of the average loss
    #[arg(long, short = 'k')]
    pub k: Option<f64>,

    /// Decimal places for statistics
    #[arg(long, short = 'P')]
    pub precision: Option<u32>,

    /// Domain plotted below the target
    #[arg(long)]
    pub below: Option<f64>,

    /// Domain plotted past the specification limit
    #[arg(long)]
    pub past: Option<f64>,

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

impl OneSidedArgs {
    pub fn options(&self, defaults: &OneSidedOptions) -> OneSidedOptions {
        OneSidedOptions {
            k: self.k.unwrap_or(defaults.k),
            precision: self.precision.unwrap_or(defaults.precision),
            below_margin: self.below.unwrap_or(defaults.below_margin),
            past_margin: self.past.unwrap_or(defaults.past_margin),
            points: self.points.unwrap_or(defaults.points),
        }
    }
}

/// Run the one-sided analysis
pub fn run(args: OneSidedArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let spec = OneSidedSpec::new(args.target, args.limit)?;
    let options = args.options(&config.one_sided);
    let samples = load_samples(&args.samples)?;

    let report = one_sided_loss(&samples, &spec, &options)?;
    log::info!(
        "one-sided: {} samples, mean={} average loss={}",
        samples.len(),
        report.statistics.mean,
        report.statistics.average_loss
    );

    emit(&report, &samples, global, args.curve, &config, &args.chart)
}
