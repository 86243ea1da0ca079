//! Error types for ignore-sync

use std::path::PathBuf;

/// Result type for ignore-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while syncing or checking an ignore file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Document error: {0}")]
    Document(#[from] ignore_core::Error),

    #[error("Provider error: {0}")]
    Provider(#[from] ignore_provider::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Lock acquisition failed for {path}: {source}")]
    LockFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
