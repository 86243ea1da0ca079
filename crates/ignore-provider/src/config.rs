//! Provider configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default template endpoint; tokens are appended comma-separated.
pub const DEFAULT_BASE_URL: &str = "https://www.toptal.com/developers/gitignore/api/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`crate::HttpTemplateProvider`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Endpoint prefix the comma-joined tokens are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_use_system_proxy() -> bool {
    true
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            use_system_proxy: default_use_system_proxy(),
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL for a set of tokens.
    pub fn endpoint(&self, tokens: &[&str]) -> String {
        format!("{}{}", self.base_url, tokens.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.use_system_proxy);
    }

    #[test]
    fn endpoint_joins_tokens_with_comma() {
        let config = ProviderConfig::default();
        assert_eq!(
            config.endpoint(&["rust", "python"]),
            "https://www.toptal.com/developers/gitignore/api/rust,python"
        );
    }

    #[test]
    fn deserialize_partial_table_uses_defaults() {
        let config: ProviderConfig = toml::from_str("timeout_secs = 5").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn deserialize_rejects_unknown_keys() {
        let result: Result<ProviderConfig, _> = toml::from_str("retries = 3");
        assert!(result.is_err());
    }
}
