//! Layered configuration
//!
//! Settings come from up to three TOML layers merged field by field:
//! the user's global config, the project's `.blockfmt.toml` and caller
//! overrides. See [`ConfigResolver`].

mod resolver;
mod settings;

pub use resolver::{ConfigResolver, PROJECT_CONFIG_FILE};
pub use settings::{
    DEFAULT_MAX_BLANK_LINES, NormalizeLayer, NormalizeSettings, Settings, SettingsLayer,
};
