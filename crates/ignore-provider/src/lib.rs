//! HTTP template provider for ignore-file generation
//!
//! Implements [`ignore_core::TemplateProvider`] against a gitignore.io-style
//! endpoint using a blocking `reqwest` client with an explicit timeout.

pub mod config;
pub mod error;
pub mod http;

pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use http::HttpTemplateProvider;
