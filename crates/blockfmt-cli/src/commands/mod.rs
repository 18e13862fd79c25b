//! Command implementations

mod format;
mod formatters;
mod locate;

pub use format::{FormatArgs, OutputMode, run_format};
pub use formatters::run_formatters;
pub use locate::run_locate;

use std::path::Path;

use blockfmt_text::Document;

use crate::error::{CliError, Result};

/// Read `path` into a document.
fn read_document(path: &Path) -> Result<Document> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::user(format!("cannot read {}: {e}", path.display())))?;
    Ok(Document::new(&text))
}

/// Current-thread runtime for the async formatter calls.
fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
