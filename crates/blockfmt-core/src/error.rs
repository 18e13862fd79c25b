//! Error types for blockfmt-core

use std::path::PathBuf;

/// Result type for blockfmt-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while formatting a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration file could not be parsed
    #[error("Invalid configuration in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An explicitly requested configuration file does not exist
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Formatter discovery or execution failed
    #[error(transparent)]
    Formatter(#[from] blockfmt_formatter::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
