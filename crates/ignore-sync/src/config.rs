//! Sync configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! tokens = ["rust", "python"]
//! extra_paths = ["/target-local"]
//! sort_paths = true
//! sort_groups = false
//!
//! [provider]
//! timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};

use ignore_core::SortOptions;
use ignore_provider::ProviderConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inputs for generating and checking one ignore file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Template tokens passed to the provider
    #[serde(default)]
    pub tokens: Vec<String>,
    /// Paths appended to the generated section
    #[serde(default)]
    pub extra_paths: Vec<String>,
    /// Sort paths within each user group
    #[serde(default = "default_true")]
    pub sort_paths: bool,
    /// Sort user groups by their comments
    #[serde(default)]
    pub sort_groups: bool,
    #[serde(default)]
    pub provider: ProviderConfig,
}

fn default_true() -> bool {
    true
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tokens: Vec::new(),
            extra_paths: Vec::new(),
            sort_paths: true,
            sort_groups: false,
            provider: ProviderConfig::default(),
        }
    }
}

impl SyncConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse_at(content, PathBuf::from("<content>"))
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse_at(&content, path.to_path_buf())
    }

    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            sort_paths: self.sort_paths,
            sort_groups: self.sort_groups,
        }
    }

    fn parse_at(content: &str, path: PathBuf) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path,
            message: e.to_string(),
        })
    }
}
