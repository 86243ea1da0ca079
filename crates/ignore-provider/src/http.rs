//! Blocking HTTP template provider

use ignore_core::TemplateProvider;
use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::ProviderConfig;
use crate::error::Result;

/// Fetches templates with `GET <base_url><token>,<token>...`.
///
/// Only `200 OK` counts as success. There is no retry; a failed request is
/// reported immediately.
#[derive(Debug, Clone)]
pub struct HttpTemplateProvider {
    config: ProviderConfig,
    client: Client,
}

impl HttpTemplateProvider {
    /// Build a provider with a client bounded by the configured timeout.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.timeout());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

impl TemplateProvider for HttpTemplateProvider {
    fn fetch(&self, tokens: &[&str]) -> ignore_core::Result<String> {
        let url = self.config.endpoint(tokens);
        tracing::debug!("Fetching templates from {}", url);

        let response = self.client.get(&url).send().map_err(|e| {
            tracing::error!("Template request failed: {}", e);
            ignore_core::Error::ProviderRequest {
                url: url.clone(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!("Template endpoint returned {}", status);
            return Err(ignore_core::Error::ProviderStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| ignore_core::Error::ProviderRequest {
                url: url.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(bytes = body.len(), "Fetched templates");
        Ok(body)
    }
}
