//! blockfmt CLI
//!
//! Formats whole files, or just the top-level blocks around a range, with
//! an external formatter.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::{FormatArgs, OutputMode};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        if let Some(hint) = e.install_instruction() {
            eprintln!("{}: {}", "hint".yellow().bold(), hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("failed to initialise logging: {e}")))?;
    tracing::debug!(?cli, "Parsed arguments");

    execute_command(cli.command, cli.config_dir)
}

fn execute_command(cmd: Commands, config_dir: Option<std::path::PathBuf>) -> Result<()> {
    match cmd {
        Commands::Format {
            file,
            range,
            formatter,
            only_selection,
            config,
            write,
            json,
        } => {
            let output = if json {
                OutputMode::Json
            } else if write {
                OutputMode::Write
            } else {
                OutputMode::Print
            };
            commands::run_format(&FormatArgs {
                file,
                range,
                formatter,
                only_selection,
                config,
                config_dir,
                output,
            })
        }
        Commands::Locate { file, range, json } => commands::run_locate(&file, range, json),
        Commands::Formatters { json } => commands::run_formatters(json),
    }
}
