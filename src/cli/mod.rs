//! CLI module - argument parsing, rendering and command dispatch

pub mod args;
pub mod commands;
pub mod input;
pub mod output;
pub mod viz;

pub use args::{ChartArgs, Cli, Commands, GlobalOpts, OutputFormat};
pub use input::SampleArgs;
pub use viz::ChartOptions;
