//! Wrapping a block so a whole-unit formatter accepts it.
//!
//! Some formatters refuse input that is not a complete compilation unit.
//! A block that does not already open with the unit header gets a synthetic
//! header line prepended; the header is removed from the formatter's output
//! before the output is realigned.

use regex::Regex;

/// A single-line unit header such as `module X where`.
#[derive(Debug, Clone)]
pub struct UnitHeader {
    line: String,
    opener: Regex,
}

impl UnitHeader {
    /// Build a header from its line. The first word is the keyword used to
    /// recognise blocks that already carry a header.
    pub fn new(line: impl Into<String>) -> Result<Self, regex::Error> {
        let line = line.into();
        let keyword = line.split_whitespace().next().unwrap_or_default();
        let opener = Regex::new(&format!(r"^\s*{}\b", regex::escape(keyword)))?;
        Ok(Self { line, opener })
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn opens(&self, text: &str) -> bool {
        self.opener.is_match(text)
    }
}

/// Block text ready to hand to a formatter, plus what is needed to map the
/// output back.
#[derive(Debug, Clone)]
pub struct PreparedBlock {
    input: String,
    header: Option<String>,
    leading_whitespace: String,
    trailing_newline: bool,
}

impl PreparedBlock {
    pub fn new(block_text: &str, header: Option<&UnitHeader>) -> Self {
        let header = header
            .filter(|h| !h.opens(block_text))
            .map(|h| h.line().to_string());
        let input = match &header {
            Some(line) => format!("{line}\n{block_text}"),
            None => block_text.to_string(),
        };
        let body = block_text.trim_start();
        Self {
            input,
            header,
            leading_whitespace: block_text[..block_text.len() - body.len()].to_string(),
            trailing_newline: block_text.ends_with('\n'),
        }
    }

    /// Text to send to the formatter.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_wrapped(&self) -> bool {
        self.header.is_some()
    }

    /// Undo the wrapping on formatter output.
    ///
    /// Everything up to and including the header line is dropped along with
    /// leading blank lines, the block's own leading whitespace is put back
    /// and a final newline the block did not have is removed.
    pub fn restore(&self, formatted: &str) -> String {
        let mut text = formatted;
        if let Some(header) = &self.header {
            match find_header_end(text, header) {
                Some(end) => text = &text[end..],
                None => tracing::warn!(header, "Formatter output lost the unit header"),
            }
        }

        let mut restored = format!("{}{}", self.leading_whitespace, text.trim_start());
        if !self.trailing_newline {
            let kept = restored
                .strip_suffix("\r\n")
                .or_else(|| restored.strip_suffix('\n'))
                .map(str::len);
            if let Some(len) = kept {
                restored.truncate(len);
            }
        }
        restored
    }
}

/// Byte offset just past the line holding `header`.
fn find_header_end(text: &str, header: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        offset += line.len();
        if line.trim() == header.trim() {
            return Some(offset);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header() -> UnitHeader {
        UnitHeader::new("module X where").unwrap()
    }

    #[test]
    fn wraps_blocks_without_header() {
        let block = PreparedBlock::new("main = pure unit", Some(&header()));
        assert!(block.is_wrapped());
        assert_eq!(block.input(), "module X where\nmain = pure unit");
    }

    #[test]
    fn leaves_blocks_that_open_with_header() {
        let text = "module Data.Foo\n  ( foo\n  ) where";
        let block = PreparedBlock::new(text, Some(&header()));
        assert!(!block.is_wrapped());
        assert_eq!(block.input(), text);
    }

    #[test]
    fn keyword_must_be_a_whole_word() {
        assert!(!header().opens("modules = []"));
        assert!(header().opens("  module Foo where"));
    }

    #[test]
    fn restore_removes_header_and_following_blank_lines() {
        let block = PreparedBlock::new("main=pure unit", Some(&header()));
        let restored = block.restore("module X where\n\nmain = pure unit\n");
        assert_eq!(restored, "main = pure unit");
    }

    #[test]
    fn restore_keeps_trailing_newline_when_block_had_one() {
        let block = PreparedBlock::new("a = 1\n", None);
        assert_eq!(block.restore("a = 1\n"), "a = 1\n");
    }

    #[test]
    fn restore_keeps_leading_whitespace() {
        let block = PreparedBlock::new("\n  x", Some(&header()));
        assert_eq!(block.restore("module X where\n\nx\n"), "\n  x");
    }

    #[test]
    fn restore_without_header_in_output_keeps_text() {
        let block = PreparedBlock::new("a = 1", Some(&header()));
        assert_eq!(block.restore("a = 1\n"), "a = 1");
    }
}
