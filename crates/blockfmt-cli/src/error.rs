//! Error types for blockfmt-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from blockfmt-core
    #[error(transparent)]
    Core(#[from] blockfmt_core::Error),

    /// Error from blockfmt-formatter
    #[error(transparent)]
    Formatter(#[from] blockfmt_formatter::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Install guidance when the failure was a missing formatter.
    pub fn install_instruction(&self) -> Option<&str> {
        match self {
            CliError::Core(blockfmt_core::Error::Formatter(err)) | CliError::Formatter(err) => {
                err.install_instruction().filter(|hint| !hint.is_empty())
            }
            _ => None,
        }
    }
}
