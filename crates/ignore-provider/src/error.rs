//! Error types for ignore-provider

/// Result type for ignore-provider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting up a provider.
///
/// Fetch failures are reported as [`ignore_core::Error`] through the
/// [`ignore_core::TemplateProvider`] trait.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
