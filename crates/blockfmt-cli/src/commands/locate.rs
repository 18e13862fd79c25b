//! Locate command implementation

use std::path::Path;

use blockfmt_text::{BlockLocator, TextRange};
use colored::Colorize;

use super::read_document;
use crate::error::Result;

/// Run the locate command
pub fn run_locate(file: &Path, selection: TextRange, json: bool) -> Result<()> {
    let document = read_document(file)?;
    let block = BlockLocator::new(&document).locate(selection);
    let located = (!block.is_empty()).then_some(block);

    if json {
        println!("{}", serde_json::to_string_pretty(&located)?);
        return Ok(());
    }

    match located {
        Some(block) => {
            println!(
                "{}:{}-{}:{}",
                block.start.line, block.start.character, block.end.line, block.end.character
            );
            for line in block.start.line..=block.end.line {
                println!("{} {}", format!("{line:>4} |").dimmed(), document.line(line).unwrap_or_default());
            }
        }
        None => println!("{}", "No block to format in selection".yellow()),
    }
    Ok(())
}
