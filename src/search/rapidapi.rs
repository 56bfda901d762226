//! RapidAPI Client
//!
//! Both providers sit behind RapidAPI and take the same request layout:
//! `GET <endpoint>?query=<keyword>` with `x-rapidapi-key` and
//! `x-rapidapi-host` headers. The client returns the parsed body untouched;
//! shape handling is left to [`super::normalize`].

use super::{Provider, UpstreamClient};
use crate::config::{ProviderEndpoint, UpstreamConfig};
use crate::types::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

const KEY_HEADER: &str = "x-rapidapi-key";
const HOST_HEADER: &str = "x-rapidapi-host";

/// Build the HTTP client shared by every provider.
///
/// Outbound calls are bounded by the configured connect and total timeouts,
/// so a hung provider cannot hold a request open forever.
pub fn build_http_client(config: &UpstreamConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("media-relay/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))
}

#[derive(Clone)]
pub struct RapidApiClient {
    http: reqwest::Client,
    provider: Provider,
    endpoint: String,
    api_key: String,
    api_host: String,
}

impl RapidApiClient {
    pub fn new(
        http: reqwest::Client,
        provider: Provider,
        endpoint: &ProviderEndpoint,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            provider,
            endpoint: endpoint.url.clone(),
            api_key: api_key.into(),
            api_host: endpoint.host.clone(),
        }
    }
}

#[async_trait]
impl UpstreamClient for RapidApiClient {
    async fn search(&self, keyword: &str) -> AppResult<Value> {
        info!(provider = %self.provider, keyword = %keyword, "Searching via RapidAPI");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("query", keyword)])
            .header(KEY_HEADER, &self.api_key)
            .header(HOST_HEADER, &self.api_host)
            .send()
            .await
            .map_err(|e| {
                AppError::UpstreamTransport(format!(
                    "{} request failed: {}",
                    self.provider.name(),
                    e
                ))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::UpstreamTransport(format!(
                "Failed to read {} response: {}",
                self.provider.name(),
                e
            ))
        })?;

        debug!(
            provider = %self.provider,
            status = status.as_u16(),
            body = %body,
            "Raw upstream response"
        );

        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| AppError::InvalidBody(e.to_string()))
    }
}
