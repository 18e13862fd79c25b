//! Symbol-anchored positions in reformatted text.
//!
//! Given how many symbols precede a selection and how many follow it in the
//! original text, find where those boundaries land in the formatter's
//! output. Line and column cannot be used because formatting changes both;
//! the symbol sequence is what survives.

use crate::symbols::is_symbol;

/// A position in trimmed text: a line plus a count of symbols on it.
///
/// For a start anchor `offset` counts the symbols on `line` that precede the
/// boundary. For an end anchor it counts the symbols on `line` that follow
/// it. An offset of 0 means the boundary sits on a line break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorPosition {
    pub line: usize,
    pub offset: usize,
}

impl AnchorPosition {
    pub fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }

    pub fn on_line_boundary(&self) -> bool {
        self.offset == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    pub start: AnchorPosition,
    pub end: AnchorPosition,
}

/// Locate the boundaries `before_symbols` from the front and
/// `after_symbols` from the back of `after_text`.
pub fn find_anchors(after_text: &str, before_symbols: usize, after_symbols: usize) -> Anchors {
    let trimmed: Vec<&str> = after_text.split('\n').map(str::trim).collect();
    let chars: Vec<char> = trimmed.join("\n").chars().collect();
    let last_line = trimmed.len() - 1;

    let anchors = Anchors {
        start: scan_forward(&chars, before_symbols),
        end: scan_backward(&chars, last_line, after_symbols),
    };
    tracing::debug!(before_symbols, after_symbols, ?anchors, "Found symbol anchors");
    anchors
}

fn scan_forward(chars: &[char], target: usize) -> AnchorPosition {
    if target == 0 {
        return AnchorPosition::new(0, 0);
    }

    let (mut count, mut line, mut offset) = (0, 0, 0);
    for (idx, &ch) in chars.iter().enumerate() {
        if ch == '\n' {
            line += 1;
            offset = 0;
            continue;
        }
        if !is_symbol(ch) {
            continue;
        }
        count += 1;
        offset += 1;
        if count == target {
            return match chars.get(idx + 1) {
                Some('\n') => AnchorPosition::new(line + 1, 0),
                _ => AnchorPosition::new(line, offset),
            };
        }
    }

    // Fewer symbols than expected: the boundary is the end of the text.
    AnchorPosition::new(line, offset)
}

fn scan_backward(chars: &[char], last_line: usize, target: usize) -> AnchorPosition {
    if target == 0 {
        return AnchorPosition::new(last_line, 0);
    }

    let (mut count, mut line, mut offset) = (0, last_line, 0);
    for (idx, &ch) in chars.iter().enumerate().rev() {
        if ch == '\n' {
            line = line.saturating_sub(1);
            offset = 0;
            continue;
        }
        if !is_symbol(ch) {
            continue;
        }
        count += 1;
        offset += 1;
        if count == target {
            let previous = idx.checked_sub(1).map(|i| chars[i]);
            return match previous {
                Some('\n') => AnchorPosition::new(line.saturating_sub(1), 0),
                _ => AnchorPosition::new(line, offset),
            };
        }
    }

    AnchorPosition::new(line, offset)
}
