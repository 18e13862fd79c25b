//! Formatter descriptors and the built-in registry.

use std::fmt;
use std::str::FromStr;

use blockfmt_text::UnitHeader;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Header prepended to blocks that do not open with their own module header.
pub const DEFAULT_UNIT_HEADER: &str = "module X where";

/// How to invoke a formatter.
///
/// Also the shape of a `custom_formatter` table in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterSpec {
    pub name: String,
    /// Executable name, or a path to it.
    pub bin: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub install_instruction: String,
    /// Header line wrapped around blocks that lack one. `None` or an empty
    /// line sends blocks as they are.
    #[serde(default = "default_unit_header")]
    pub unit_header: Option<String>,
}

fn default_unit_header() -> Option<String> {
    Some(DEFAULT_UNIT_HEADER.to_string())
}

impl FormatterSpec {
    pub fn new(name: impl Into<String>, bin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bin: bin.into(),
            args: Vec::new(),
            install_instruction: String::new(),
            unit_header: default_unit_header(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_install_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.install_instruction = instruction.into();
        self
    }

    pub fn with_unit_header(mut self, header: Option<String>) -> Self {
        self.unit_header = header;
        self
    }

    /// The compiled unit header, if this formatter uses one.
    pub fn unit_header(&self) -> Result<Option<UnitHeader>> {
        self.unit_header
            .as_deref()
            .filter(|header| !header.trim().is_empty())
            .map(|header| {
                UnitHeader::new(header).map_err(|source| Error::UnitHeader {
                    header: header.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// `bin` followed by its arguments, for display.
    pub fn command_line(&self) -> String {
        std::iter::once(self.bin.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The formatter selected by name in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterChoice {
    Purty,
    Pose,
    #[default]
    Tidy,
    /// No formatter; documents are only normalised.
    None,
}

impl FormatterChoice {
    pub const BUILTIN: [FormatterChoice; 3] = [Self::Purty, Self::Pose, Self::Tidy];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Purty => "purty",
            Self::Pose => "pose",
            Self::Tidy => "tidy",
            Self::None => "none",
        }
    }

    /// The built-in descriptor for this choice.
    pub fn spec(self) -> Option<FormatterSpec> {
        let spec = match self {
            Self::Purty => FormatterSpec::new("purty", "purty")
                .with_args(["-"])
                .with_install_instruction("Do you have purty installed? (`npm install purty [-g]`)"),
            Self::Pose => FormatterSpec::new("pose", "prettier")
                .with_args(["--stdin-filepath", "__dummy__format__.purs"])
                .with_install_instruction(
                    "Do you have prettier and the pose plugin installed? \
                     (`npm install --save-dev prettier @rowtype-yoga/prettier-plugin-purescript`)",
                ),
            Self::Tidy => FormatterSpec::new("tidy", "purs-tidy")
                .with_args(["format"])
                .with_install_instruction("Do you have purs-tidy installed? (`npm install purs-tidy [-g]`)"),
            Self::None => return None,
        };
        Some(spec)
    }
}

impl fmt::Display for FormatterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatterChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "purty" => Ok(Self::Purty),
            "pose" => Ok(Self::Pose),
            "tidy" => Ok(Self::Tidy),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown formatter '{other}' (expected purty, pose, tidy or none)"
            )),
        }
    }
}
