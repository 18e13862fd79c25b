//! Entry point tying configuration, formatter and realignment together.

use blockfmt_formatter::{Formatter, InvocationContext, ProcessFormatter};
use blockfmt_text::{Document, ReplacementEdit, TextRange};

use crate::Result;
use crate::config::Settings;
use crate::normalize::{Normalizer, Passthrough, WhitespaceNormalizer};
use crate::pipeline::format_selection;

/// Turns a format request into replacement edits.
pub struct FormatOrchestrator {
    settings: Settings,
    normalizer: Box<dyn Normalizer>,
}

impl FormatOrchestrator {
    /// Orchestrator with the normaliser described by `settings`.
    pub fn new(settings: Settings) -> Self {
        let normalizer: Box<dyn Normalizer> = if settings.normalize.enabled {
            Box::new(WhitespaceNormalizer::new(settings.normalize.max_blank_lines))
        } else {
            Box::new(Passthrough)
        };
        Self {
            settings,
            normalizer,
        }
    }

    /// Replace the normaliser.
    pub fn with_normalizer(mut self, normalizer: impl Normalizer + 'static) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Produce the edits for formatting `document`.
    ///
    /// - no formatter: the whole document is only normalised
    /// - no selection with `only_selection` set: same as above
    /// - no selection: the whole document is formatted
    /// - a selection: only the enclosing block is replaced, and only the
    ///   selected lines take the formatter's layout
    ///
    /// Edits that would not change the document are still returned for the
    /// whole-document paths; a selection with nothing to format yields none.
    pub async fn format(
        &self,
        document: &Document,
        selection: Option<TextRange>,
        formatter: Option<&dyn Formatter>,
    ) -> Result<Vec<ReplacementEdit>> {
        let Some(formatter) = formatter else {
            tracing::debug!("No formatter configured, normalising only");
            return Ok(vec![self.normalized_document(document)]);
        };

        match selection {
            None if self.settings.only_selection => {
                tracing::debug!("No selection and only_selection set, normalising only");
                Ok(vec![self.normalized_document(document)])
            }
            None => {
                tracing::debug!(formatter = formatter.name(), "Formatting whole document");
                let formatted = formatter.format(&document.text()).await?;
                Ok(vec![ReplacementEdit::whole_document(
                    document,
                    self.normalizer.normalize(&formatted),
                )])
            }
            Some(selection) => {
                let header = self
                    .settings
                    .resolve_formatter()
                    .map(|spec| spec.unit_header())
                    .transpose()?
                    .flatten();
                let edit = format_selection(document, selection, formatter, header.as_ref()).await?;
                Ok(edit
                    .map(|edit| {
                        let text = self.normalizer.normalize(&edit.new_text);
                        ReplacementEdit::new(edit.range, text)
                    })
                    .into_iter()
                    .collect())
            }
        }
    }

    /// Resolve the configured formatter and run [`Self::format`] with it.
    pub async fn run(
        &self,
        document: &Document,
        selection: Option<TextRange>,
        context: &InvocationContext,
    ) -> Result<Vec<ReplacementEdit>> {
        match self.settings.resolve_formatter() {
            Some(spec) => {
                let formatter = ProcessFormatter::new(spec, context.clone());
                self.format(document, selection, Some(&formatter)).await
            }
            None => self.format(document, selection, None).await,
        }
    }

    fn normalized_document(&self, document: &Document) -> ReplacementEdit {
        ReplacementEdit::whole_document(document, self.normalizer.normalize(&document.text()))
    }
}
