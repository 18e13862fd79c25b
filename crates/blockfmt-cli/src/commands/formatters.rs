//! Formatters command implementation

use blockfmt_formatter::{FormatterChoice, find_executable};
use colored::Colorize;
use serde::Serialize;

use super::runtime;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct FormatterStatus {
    name: String,
    command: String,
    default: bool,
    path: Option<String>,
}

/// Run the formatters command
pub fn run_formatters(json: bool) -> Result<()> {
    let rt = runtime()?;
    let statuses: Vec<FormatterStatus> = FormatterChoice::BUILTIN
        .into_iter()
        .filter_map(|choice| choice.spec().map(|spec| (choice, spec)))
        .map(|(choice, spec)| {
            let path = rt.block_on(find_executable(&spec.bin, None));
            FormatterStatus {
                name: spec.name.clone(),
                command: spec.command_line(),
                default: choice == FormatterChoice::default(),
                path: path.map(|p| p.display().to_string()),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    println!("{}", "Built-in formatters".bold());
    println!();
    for status in &statuses {
        let marker = if status.default { " (default)" } else { "" };
        let found = match &status.path {
            Some(path) => path.green(),
            None => "not installed".yellow(),
        };
        println!(
            "  {}{}  {}  {}",
            status.name.cyan(),
            marker.dimmed(),
            status.command.dimmed(),
            found
        );
    }
    Ok(())
}
