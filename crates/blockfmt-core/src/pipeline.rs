//! Formatting a selection through a whole-block formatter.

use blockfmt_formatter::Formatter;
use blockfmt_text::{Document, PreparedBlock, ReplacementEdit, SelectionSplit, TextRange, UnitHeader};

use crate::Result;

/// Format the top-level block(s) around `selection` and keep only the
/// selected part of the formatter's output.
///
/// Returns `Ok(None)` when the selection holds nothing to format. A
/// formatter failure is returned as is; no partial edit is produced.
pub async fn format_selection(
    document: &Document,
    selection: TextRange,
    formatter: &dyn Formatter,
    unit_header: Option<&UnitHeader>,
) -> Result<Option<ReplacementEdit>> {
    let Some(split) = SelectionSplit::capture(document, selection) else {
        tracing::debug!(?selection, "Nothing to format in selection");
        return Ok(None);
    };

    let prepared = PreparedBlock::new(split.block_text(), unit_header);
    tracing::debug!(
        formatter = formatter.name(),
        block = ?split.block(),
        wrapped = prepared.is_wrapped(),
        "Formatting block"
    );
    let output = formatter.format(prepared.input()).await?;
    let formatted = prepared.restore(&output);

    Ok(Some(split.into_edit(&formatted)))
}
