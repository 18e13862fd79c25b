//! Whitespace normalisation applied to every edit's text.

/// Final cleanup of text about to be written into the document.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

/// Strips trailing whitespace from every line and caps runs of blank lines.
///
/// Line endings (`\n` or `\r\n`) are kept as they are, including a final
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceNormalizer {
    pub max_blank_lines: usize,
}

impl WhitespaceNormalizer {
    pub fn new(max_blank_lines: usize) -> Self {
        Self { max_blank_lines }
    }
}

impl Default for WhitespaceNormalizer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_BLANK_LINES)
    }
}

impl Normalizer for WhitespaceNormalizer {
    fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut blank_run = 0;

        for line in text.split_inclusive('\n') {
            let (content, ending) = match line.strip_suffix("\r\n") {
                Some(content) => (content, "\r\n"),
                None => match line.strip_suffix('\n') {
                    Some(content) => (content, "\n"),
                    None => (line, ""),
                },
            };
            let content = content.trim_end();

            if content.is_empty() && !ending.is_empty() {
                blank_run += 1;
                if blank_run > self.max_blank_lines {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            out.push_str(content);
            out.push_str(ending);
        }
        out
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passthrough;

impl Normalizer for Passthrough {
    fn normalize(&self, text: &str) -> String {
        text.to_string()
    }
}
