//! `qloss config` command - inspect configuration

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration after merging all files
    Show,

    /// List configuration files in precedence order
    Path,
}

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(global),
        ConfigCommands::Path => run_path(),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config).into_diagnostic()?;
            println!("{}", json);
        }
        _ => {
            let yaml = serde_yml::to_string(&config).into_diagnostic()?;
            print!("{}", yaml);
        }
    }
    Ok(())
}

fn run_path() -> Result<()> {
    for path in Config::sources() {
        let status = if path.exists() {
            style("found").green()
        } else {
            style("missing").dim()
        };
        println!("{}  ({})", path.display(), status);
    }
    Ok(())
}
