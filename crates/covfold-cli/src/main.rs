//! Covfold CLI: coverage summaries per feature folder
//!
//! ## Usage
//!
//! ```bash
//! covfold summary --preset profile          # Profile table + distance to 95%
//! covfold summary --preset media --limit 10 # Ten lowest media files
//! covfold html                              # coverage/html/index.html
//! covfold presets                           # List presets
//! ```

use clap::Parser;
use covfold_cli::{
    handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, FileConfig, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    match cli.command {
        Commands::Summary(args) => handlers::execute_summary(&config, &args),
        Commands::Html(args) => handlers::execute_html(&config, &args),
        Commands::Presets => {
            handlers::execute_presets(&config);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    logging::init(verbosity);

    let color: ColorChoice = cli.color.into();
    console::set_colors_enabled(color.should_color());

    let defaults = match cli.config {
        Some(ref path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    Ok(CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_defaults(defaults))
}
