//! Format command implementation

use std::path::{Path, PathBuf};

use blockfmt_core::{ConfigResolver, FormatOrchestrator, SettingsLayer};
use blockfmt_formatter::{FormatterChoice, InvocationContext};
use blockfmt_text::{TextRange, apply_edits};
use colored::Colorize;

use super::{read_document, runtime};
use crate::error::Result;

/// Where the result of a format run goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the formatted document to stdout
    Print,
    /// Write the formatted document back to the file
    Write,
    /// Print the edits as JSON
    Json,
}

/// Arguments of `blockfmt format`.
#[derive(Debug, Clone)]
pub struct FormatArgs {
    pub file: PathBuf,
    pub range: Option<TextRange>,
    pub formatter: Option<FormatterChoice>,
    pub only_selection: bool,
    pub config: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub output: OutputMode,
}

/// Run the format command
pub fn run_format(args: &FormatArgs) -> Result<()> {
    let document = read_document(&args.file)?;

    let mut resolver = ConfigResolver::new(&args.file);
    if let Some(dir) = &args.config_dir {
        resolver = resolver.with_global_config_dir(dir);
    }
    if let Some(config) = &args.config {
        resolver = resolver.with_config_file(config);
    }
    let overrides = SettingsLayer {
        formatter: args.formatter,
        only_selection: args.only_selection.then_some(true),
        ..Default::default()
    };
    let settings = resolver.resolve(&overrides)?;

    let context = InvocationContext::for_document(&args.file);
    let orchestrator = FormatOrchestrator::new(settings);
    let edits = runtime()?.block_on(orchestrator.run(&document, args.range, &context))?;
    tracing::debug!(edits = edits.len(), "Format finished");

    match args.output {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&edits)?);
        }
        OutputMode::Print => {
            print!("{}", apply_edits(&document, &edits));
        }
        OutputMode::Write => {
            let changed = edits.iter().any(|edit| !edit.is_noop(&document));
            if changed {
                write_file(&args.file, &apply_edits(&document, &edits))?;
                println!("{} {}", "Formatted".green().bold(), args.file.display());
            } else {
                println!("{} {}", "Unchanged".dimmed(), args.file.display());
            }
        }
    }
    Ok(())
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)?;
    Ok(())
}
