// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("No tokens found in the input string.")]
    NoTokens,

    #[error("Encountered text corresponding to a disallowed special token.")]
    DisallowedSpecial,

    #[error("Unknown model '{model}': {reason}")]
    UnknownModel { model: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CountError>;

impl CountError {
    /// Wraps an I/O failure on `path`, keeping the missing-file case distinct.
    #[must_use]
    pub fn from_io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { source, path }
        }
    }
}
