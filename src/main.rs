use clap::Parser;
use miette::Result;
use qloss::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    let level = match cli.global.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if cli.global.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.command {
        Commands::TwoSided(args) => qloss::cli::commands::two_sided::run(args, &cli.global),
        Commands::OneSided(args) => qloss::cli::commands::one_sided::run(args, &cli.global),
        Commands::Config(cmd) => qloss::cli::commands::config::run(cmd, &cli.global),
        Commands::Completions(args) => qloss::cli::commands::completions::run(args),
    }
}
