//! Top-level block location.
//!
//! A top-level block starts at a line with no leading whitespace and runs
//! over the blank and indented lines that follow it, up to the next
//! non-indented line. Nothing here understands the language being
//! formatted; indentation is the only signal.

use crate::document::{Document, LineKind, Position, TextRange};

/// Finds the run of top-level blocks enclosing a selection.
#[derive(Debug, Clone, Copy)]
pub struct BlockLocator<'a> {
    document: &'a Document,
}

impl<'a> BlockLocator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Smallest whole-line range covering every selected line whose start
    /// is a block start and whose end is the last content line of a block.
    ///
    /// Returns an empty range when the selection holds no block content,
    /// for example when only blank lines are selected.
    pub fn locate(&self, selection: TextRange) -> TextRange {
        let doc = self.document;
        let selection = doc.clamp_range(selection);
        let first = selection.start.line;
        let last = selection.last_selected_line();

        let start = self.block_start(first);
        if start >= doc.line_count() {
            tracing::debug!(first, "No block at or after selection start");
            let end = Position::new(doc.last_line(), doc.line_len(doc.last_line()));
            return TextRange { start: end, end };
        }
        if start > last {
            tracing::debug!(start, last, "Selection holds no block content");
            let at = Position::new(start, 0);
            return TextRange { start: at, end: at };
        }

        let next = self.next_block_start(last);
        let end = self.last_content_line(start, next);
        tracing::debug!(first, last, start, next, end, "Located top-level block");
        doc.line_range(start, end)
    }

    /// First line of the block containing `line`.
    ///
    /// Blank lines ahead of `line` are skipped first: if they lead straight
    /// to a top-level line, that line starts the block. Meeting an indented
    /// line instead means `line` sits inside a block, whose start is found
    /// by walking backwards. Returns `line_count()` when only blank lines
    /// remain.
    pub fn block_start(&self, line: usize) -> usize {
        let doc = self.document;
        let mut index = line;
        while index < doc.line_count() {
            match doc.line_kind(index) {
                LineKind::TopLevel => return index,
                LineKind::Blank => index += 1,
                LineKind::Continuation => break,
            }
        }
        if index >= doc.line_count() {
            return doc.line_count();
        }

        let mut index = line;
        while index > 0 && doc.line_kind(index) != LineKind::TopLevel {
            index -= 1;
        }
        index
    }

    /// First top-level line strictly after `line`, or `line_count()`.
    pub fn next_block_start(&self, line: usize) -> usize {
        let doc = self.document;
        (line + 1..doc.line_count())
            .find(|&index| doc.line_kind(index) == LineKind::TopLevel)
            .unwrap_or(doc.line_count())
    }

    /// Last non-blank line in `floor..next`, or `floor` if there is none.
    pub fn last_content_line(&self, floor: usize, next: usize) -> usize {
        let next = next.min(self.document.line_count());
        (floor..next)
            .rev()
            .find(|&index| !self.document.is_blank(index))
            .unwrap_or(floor)
    }
}

/// Locate the block range for `selection` in `document`.
pub fn locate_block(document: &Document, selection: TextRange) -> TextRange {
    BlockLocator::new(document).locate(selection)
}
