//! Read-only line view of a document.
//!
//! A [`Document`] is a snapshot taken once per formatting request. Lines are
//! addressed by zero-based index and characters by Unicode scalar value
//! within a line. The final line never carries a trailing newline; a text
//! ending in a newline produces a trailing empty line instead.

use serde::{Deserialize, Serialize};

/// Line terminator used when joining lines back into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect the line ending of `text`. Any `\r\n` makes it CRLF.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A (line, character) position.
///
/// Ordering is lexicographic: line first, then character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// An ordered pair of positions, `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    /// Create a range, swapping the endpoints if they are given out of order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Range spanning whole lines `start_line ..= end_line`, ending at
    /// `end_character` on the last line.
    pub fn lines(start_line: usize, end_line: usize, end_character: usize) -> Self {
        Self::new(
            Position::new(start_line, 0),
            Position::new(end_line, end_character),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.start.line <= line && line <= self.end.line
    }

    /// The last line that actually carries selected text.
    ///
    /// A selection ending at character 0 of a later line selects nothing on
    /// that line, so the line before it is the last selected one.
    pub fn last_selected_line(&self) -> usize {
        if self.end.character == 0 && self.end.line > self.start.line {
            self.end.line - 1
        } else {
            self.end.line
        }
    }
}

/// Classification of a line for block detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty once trailing whitespace is removed.
    Blank,
    /// Starts with whitespace and has content.
    Continuation,
    /// Starts with a non-whitespace character.
    TopLevel,
}

/// Immutable line-indexed snapshot of a text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    line_ending: LineEnding,
}

impl Document {
    pub fn new(text: &str) -> Self {
        let line_ending = LineEnding::detect(text);
        let lines = text
            .split('\n')
            .map(|line| match line_ending {
                LineEnding::CrLf => line.strip_suffix('\r').unwrap_or(line).to_string(),
                LineEnding::Lf => line.to_string(),
            })
            .collect();
        Self { lines, line_ending }
    }

    /// Number of lines; always at least one.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Length of a line in characters, 0 for lines past the end.
    pub fn line_len(&self, index: usize) -> usize {
        self.line(index).map_or(0, |l| l.chars().count())
    }

    pub fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn line_kind(&self, index: usize) -> LineKind {
        let text = self.line(index).unwrap_or("");
        if text.trim_end().is_empty() {
            LineKind::Blank
        } else if text.starts_with(char::is_whitespace) {
            LineKind::Continuation
        } else {
            LineKind::TopLevel
        }
    }

    pub fn is_blank(&self, index: usize) -> bool {
        self.line_kind(index) == LineKind::Blank
    }

    /// Clamp a position onto an existing line and character.
    pub fn clamp(&self, position: Position) -> Position {
        let line = position.line.min(self.last_line());
        Position::new(line, position.character.min(self.line_len(line)))
    }

    pub fn clamp_range(&self, range: TextRange) -> TextRange {
        TextRange::new(self.clamp(range.start), self.clamp(range.end))
    }

    /// Whole-line range from `start_line` to the end of `end_line`.
    ///
    /// `end_line` is clamped to the document. When `start_line` is past
    /// `end_line` the range collapses to the start of `start_line`.
    pub fn line_range(&self, start_line: usize, end_line: usize) -> TextRange {
        let end_line = end_line.min(self.last_line());
        if start_line > end_line {
            let start = Position::new(start_line, 0);
            return TextRange { start, end: start };
        }
        TextRange::lines(start_line, end_line, self.line_len(end_line))
    }

    pub fn full_range(&self) -> TextRange {
        self.line_range(0, self.last_line())
    }

    /// Lines in `lines` joined with the document's line ending.
    pub fn lines_text(&self, lines: std::ops::Range<usize>) -> String {
        let end = lines.end.min(self.lines.len());
        if lines.start >= end {
            return String::new();
        }
        self.lines[lines.start..end].join(self.line_ending.as_str())
    }

    /// Text covered by `range`, clamped to the document.
    pub fn text_in(&self, range: TextRange) -> String {
        let range = self.clamp_range(range);
        let (start, end) = (range.start, range.end);
        let first = &self.lines[start.line];
        if start.line == end.line {
            return char_slice(first, start.character, end.character).to_string();
        }

        let eol = self.line_ending.as_str();
        let mut out = String::from(char_slice(first, start.character, usize::MAX));
        for line in &self.lines[start.line + 1..end.line] {
            out.push_str(eol);
            out.push_str(line);
        }
        out.push_str(eol);
        out.push_str(char_slice(&self.lines[end.line], 0, end.character));
        out
    }

    pub fn text(&self) -> String {
        self.lines.join(self.line_ending.as_str())
    }
}

/// Slice `s` by character indices, clamped to its length.
pub(crate) fn char_slice(s: &str, from: usize, to: usize) -> &str {
    let byte = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    let (from, to) = (byte(from), byte(to));
    if from >= to { "" } else { &s[from..to] }
}
