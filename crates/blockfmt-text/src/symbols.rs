//! Symbol counting.
//!
//! A symbol is any non-whitespace character. Reformatting moves whitespace
//! around but keeps the sequence of symbols, so symbol counts serve as
//! anchors that survive formatting.

/// Which end of a text to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Start,
    End,
}

pub fn is_symbol(ch: char) -> bool {
    !ch.is_whitespace()
}

/// Number of non-whitespace characters in `text`.
pub fn symbol_count(text: &str) -> usize {
    text.chars().filter(|&ch| is_symbol(ch)).count()
}

/// Remove `count` symbols from one side of `text`.
///
/// Whitespace (newlines included) between the removed symbols goes with
/// them but never counts. Whitespace beyond the last removed symbol is kept.
/// Asking for more symbols than the text holds empties it.
pub fn shift_symbols(text: &str, count: usize, side: Side) -> &str {
    if count == 0 {
        return text;
    }

    let mut removed = 0;
    match side {
        Side::End => {
            for (idx, ch) in text.char_indices().rev() {
                if is_symbol(ch) {
                    removed += 1;
                    if removed == count {
                        return &text[..idx];
                    }
                }
            }
        }
        Side::Start => {
            for (idx, ch) in text.char_indices() {
                if is_symbol(ch) {
                    removed += 1;
                    if removed == count {
                        return &text[idx + ch.len_utf8()..];
                    }
                }
            }
        }
    }
    ""
}
