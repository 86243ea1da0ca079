//! Error types for ignore-core

/// Result type for ignore-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, editing, refreshing or rendering a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("Template provider at {url} returned status {status}")]
    ProviderStatus { url: String, status: u16 },

    #[error("Template provider request to {url} failed: {message}")]
    ProviderRequest { url: String, message: String },

    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    #[error("Invalid entry {value:?}: {reason}")]
    InvalidEntry { value: String, reason: &'static str },

    #[error("Generated content line {line} is the end guard")]
    EndGuardInContent { line: usize },

    #[error("Generated content hash is not set; refresh it before rendering")]
    MissingContentHash,
}

impl Error {
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            message: message.into(),
        }
    }

    /// Whether the error was reported by the template provider.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            Self::ProviderStatus { .. } | Self::ProviderRequest { .. }
        )
    }
}
