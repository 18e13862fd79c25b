//! Configuration and orchestration for block-aware range formatting.
//!
//! [`FormatOrchestrator`] decides, from the [`Settings`] and whether a
//! selection was given, which of the formatting paths to take and returns
//! the resulting replacement edits.

pub mod config;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod pipeline;

pub use config::{ConfigResolver, Settings, SettingsLayer};
pub use error::{Error, Result};
pub use normalize::{Normalizer, Passthrough, WhitespaceNormalizer};
pub use orchestrator::FormatOrchestrator;
pub use pipeline::format_selection;
