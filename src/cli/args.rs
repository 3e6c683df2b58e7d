//! Command-line argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::config::ConfigCommands;
use crate::cli::commands::one_sided::OneSidedArgs;
use crate::cli::commands::two_sided::TwoSidedArgs;

/// Taguchi quality-loss curves from measurement data
#[derive(Parser, Debug)]
#[command(name = "qloss", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options accepted by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Symmetric loss bounded by lower and upper specification limits
    TwoSided(TwoSidedArgs),

    /// Loss bounded by a target and a single specification limit
    OneSided(OneSidedArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table for terminals
    Auto,
    /// Statistics table (and optional curve table / chart)
    Table,
    /// Full report as YAML
    Yaml,
    /// Full report as JSON
    Json,
    /// Loss curve as CSV (x,loss)
    Csv,
}

/// Display toggles for the loss chart
///
/// These only affect rendering; the numbers are the same either way.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ChartArgs {
    /// Render a braille chart of the loss curve
    #[arg(long, short = 'p')]
    pub plot: bool,

    /// Hide the sample density overlay
    #[arg(long)]
    pub no_density: bool,

    /// Hide the mean marker
    #[arg(long)]
    pub no_mean: bool,

    /// Hide the statistics annotation under the chart
    #[arg(long)]
    pub no_annotate: bool,

    /// Hide axis tick values
    #[arg(long)]
    pub hide_ticks: bool,

    /// X-axis label
    #[arg(long)]
    pub x_label: Option<String>,

    /// Y-axis label
    #[arg(long)]
    pub y_label: Option<String>,

    /// Chart width in braille dots
    #[arg(long)]
    pub width: Option<u32>,

    /// Chart height in braille dots
    #[arg(long)]
    pub height: Option<u32>,
}
