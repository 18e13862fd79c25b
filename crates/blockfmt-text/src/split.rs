//! Splitting a block around a selection and stitching formatter output back.
//!
//! The block enclosing the selection is formatted as a whole. Only the part
//! of the output that corresponds to the selection is kept; the text before
//! and after the selection comes from the original document, trimmed just
//! enough to join the formatted slice.

use crate::anchor::{AnchorPosition, find_anchors};
use crate::document::{Document, LineEnding, TextRange};
use crate::edit::ReplacementEdit;
use crate::locator::locate_block;
use crate::symbols::{Side, shift_symbols, symbol_count};

/// A located block cut into the lines before, inside and after a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSplit {
    block: TextRange,
    block_text: String,
    prefix: String,
    selection: String,
    suffix: String,
    line_ending: LineEnding,
}

impl SelectionSplit {
    /// Locate the block around `selection` and capture its pieces.
    ///
    /// The selection is widened to whole lines. Returns `None` when the
    /// selection contains nothing to format.
    pub fn capture(document: &Document, selection: TextRange) -> Option<Self> {
        let selection = document.clamp_range(selection);
        let block = locate_block(document, selection);
        if block.is_empty() {
            return None;
        }

        let first = selection.start.line.max(block.start.line);
        let last = selection.last_selected_line().min(block.end.line).max(first);
        let split = Self {
            block,
            block_text: document.text_in(block),
            prefix: document.lines_text(block.start.line..first),
            selection: document.lines_text(first..last + 1),
            suffix: document.lines_text(last + 1..block.end.line + 1),
            line_ending: document.line_ending(),
        };

        tracing::debug!(
            block_start = block.start.line,
            block_end = block.end.line,
            first,
            last,
            prefix_symbols = symbol_count(&split.prefix),
            suffix_symbols = symbol_count(&split.suffix),
            "Captured selection split"
        );
        Some(split)
    }

    /// The whole-line range of the enclosing block(s).
    pub fn block(&self) -> TextRange {
        self.block
    }

    pub fn block_text(&self) -> &str {
        &self.block_text
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Rebuild the block from original prefix, formatted selection and
    /// original suffix.
    ///
    /// `formatted` is the formatter's output for [`Self::block_text`].
    pub fn reassemble(&self, formatted: &str) -> String {
        let expected = symbol_count(&self.block_text);
        let actual = symbol_count(formatted);
        if expected != actual {
            tracing::warn!(expected, actual, "Formatter changed the block's symbols");
        }

        let anchors = find_anchors(formatted, symbol_count(&self.prefix), symbol_count(&self.suffix));
        let formatted_lines: Vec<&str> = formatted
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let cut_end = anchors.end.line.min(formatted_lines.len() - 1);
        let cut: &[&str] = if anchors.start.line <= cut_end {
            &formatted_lines[anchors.start.line..=cut_end]
        } else {
            &[]
        };

        let mut lines = prefix_lines(&self.prefix, anchors.start);
        let prefix_len = lines.len();
        lines.extend_from_slice(cut);
        let suffix = suffix_lines(&self.suffix, anchors.end);
        tracing::debug!(
            prefix_lines = prefix_len,
            cut_lines = cut.len(),
            suffix_lines = suffix.len(),
            "Reassembled block"
        );
        lines.extend(suffix);

        lines.join(self.line_ending.as_str())
    }

    /// The edit replacing the block with the reassembled text.
    pub fn into_edit(self, formatted: &str) -> ReplacementEdit {
        let text = self.reassemble(formatted);
        ReplacementEdit::new(self.block, text)
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Prefix lines that survive the seam with the formatted slice.
///
/// Symbols the formatter placed on the slice's first line are removed from
/// the prefix. If the seam is a line break, blank lines at the end of the
/// prefix are dropped because the slice carries the formatter's own gap.
fn prefix_lines(prefix: &str, anchor: AnchorPosition) -> Vec<&str> {
    if prefix.is_empty() {
        return Vec::new();
    }

    let mut lines = split_lines(shift_symbols(prefix, anchor.offset, Side::End));
    if anchor.on_line_boundary() {
        while lines.last().is_some_and(|line| is_blank(line)) {
            lines.pop();
        }
    } else if lines.last().is_some_and(|line| is_blank(line)) {
        lines.pop();
    }
    lines
}

/// Suffix lines that survive the seam, mirroring [`prefix_lines`].
fn suffix_lines(suffix: &str, anchor: AnchorPosition) -> Vec<&str> {
    if suffix.is_empty() {
        return Vec::new();
    }

    let lines = split_lines(shift_symbols(suffix, anchor.offset, Side::Start));
    let skip = if anchor.on_line_boundary() {
        lines.iter().take_while(|line| is_blank(line)).count()
    } else {
        usize::from(lines.first().is_some_and(|line| is_blank(line)))
    };
    lines[skip..].to_vec()
}
