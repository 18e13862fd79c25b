//! Replacement edits handed back to the host.

use serde::{Deserialize, Serialize};

use crate::document::{Document, Position, TextRange};

/// Replace the text in `range` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementEdit {
    pub range: TextRange,
    pub new_text: String,
}

impl ReplacementEdit {
    pub fn new(range: TextRange, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Replace the whole of `document`.
    pub fn whole_document(document: &Document, new_text: impl Into<String>) -> Self {
        Self::new(document.full_range(), new_text)
    }

    /// Whether applying the edit would leave `document` unchanged.
    pub fn is_noop(&self, document: &Document) -> bool {
        document.text_in(self.range) == self.new_text
    }

    /// The document text with this edit applied.
    pub fn apply(&self, document: &Document) -> String {
        let range = document.clamp_range(self.range);
        let end_of_doc = Position::new(document.last_line(), document.line_len(document.last_line()));

        let mut out = document.text_in(TextRange::new(Position::default(), range.start));
        out.push_str(&self.new_text);
        out.push_str(&document.text_in(TextRange::new(range.end, end_of_doc)));
        out
    }
}

/// Apply non-overlapping edits, last first so earlier ranges stay valid.
pub fn apply_edits(document: &Document, edits: &[ReplacementEdit]) -> String {
    let mut sorted: Vec<&ReplacementEdit> = edits.iter().collect();
    sorted.sort_by(|a, b| b.range.start.cmp(&a.range.start));

    let mut text = document.text();
    for edit in sorted {
        text = edit.apply(&Document::new(&text));
    }
    text
}
