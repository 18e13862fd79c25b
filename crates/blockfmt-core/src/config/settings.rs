//! Effective settings and the partial layers they are merged from.

use blockfmt_formatter::{FormatterChoice, FormatterSpec};
use serde::{Deserialize, Serialize};

/// Consecutive blank lines kept by default when normalising.
pub const DEFAULT_MAX_BLANK_LINES: usize = 2;

/// Whitespace normalisation applied to every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeSettings {
    pub enabled: bool,
    pub max_blank_lines: usize,
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_blank_lines: DEFAULT_MAX_BLANK_LINES,
        }
    }
}

/// The effective configuration after all layers are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Built-in formatter to use when no custom formatter is configured
    pub formatter: FormatterChoice,
    /// User-supplied formatter command; takes precedence over `formatter`
    pub custom_formatter: Option<FormatterSpec>,
    /// Without a selection, only normalise instead of formatting everything
    pub only_selection: bool,
    pub normalize: NormalizeSettings,
}

impl Settings {
    /// The formatter to run, if any.
    pub fn resolve_formatter(&self) -> Option<FormatterSpec> {
        self.custom_formatter
            .clone()
            .or_else(|| self.formatter.spec())
    }

    /// Apply a layer on top of these settings; fields the layer sets win.
    pub fn merge(&mut self, layer: &SettingsLayer) {
        if let Some(formatter) = layer.formatter {
            self.formatter = formatter;
        }
        if let Some(custom) = &layer.custom_formatter {
            self.custom_formatter = Some(custom.clone());
        }
        if let Some(only_selection) = layer.only_selection {
            self.only_selection = only_selection;
        }
        if let Some(normalize) = &layer.normalize {
            if let Some(enabled) = normalize.enabled {
                self.normalize.enabled = enabled;
            }
            if let Some(max) = normalize.max_blank_lines {
                self.normalize.max_blank_lines = max;
            }
        }
    }
}

/// One configuration source. Every field is optional so that a layer only
/// overrides what it mentions.
///
/// ```toml
/// formatter = "purty"
/// only_selection = true
///
/// [normalize]
/// max_blank_lines = 1
///
/// [custom_formatter]
/// name = "local-tidy"
/// bin = "./bin/purs-tidy"
/// args = ["format"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsLayer {
    pub formatter: Option<FormatterChoice>,
    pub custom_formatter: Option<FormatterSpec>,
    pub only_selection: Option<bool>,
    pub normalize: Option<NormalizeLayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeLayer {
    pub enabled: Option<bool>,
    pub max_blank_lines: Option<usize>,
}

impl SettingsLayer {
    /// Parse a layer from TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
