//! Error types for blockfmt-formatter

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Formatter executable not found: {bin}")]
    NotFound {
        bin: String,
        install_instruction: String,
    },

    #[error("{name} failed ({}): {stderr}", exit_label(.code))]
    Process {
        name: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{name} produced output that is not valid UTF-8")]
    InvalidOutput { name: String },

    #[error("Invalid unit header {header:?}: {source}")]
    UnitHeader {
        header: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl Error {
    /// Guidance for installing the missing formatter, if this is a
    /// [`Error::NotFound`].
    pub fn install_instruction(&self) -> Option<&str> {
        match self {
            Error::NotFound {
                install_instruction,
                ..
            } => Some(install_instruction),
            _ => None,
        }
    }
}
