use crate::config::Config;
use crate::search::{build_http_client, Provider, RapidApiClient, UpstreamClient};
use crate::types::AppResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_KEYWORD: &str = "cute dogs";

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub youtube: Arc<dyn UpstreamClient>,
    pub instagram: Arc<dyn UpstreamClient>,
}

impl AppState {
    /// Wire one RapidAPI client per provider over a single HTTP client.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let http = build_http_client(&config.upstream)?;
        let api_key = config.upstream.api_key.clone();

        let youtube = RapidApiClient::new(
            http.clone(),
            Provider::YouTube,
            &config.upstream.youtube,
            api_key.clone(),
        );
        let instagram = RapidApiClient::new(
            http,
            Provider::Instagram,
            &config.upstream.instagram,
            api_key,
        );

        Ok(Self {
            config,
            youtube: Arc::new(youtube),
            instagram: Arc::new(instagram),
        })
    }

    pub fn client(&self, provider: Provider) -> &dyn UpstreamClient {
        match provider {
            Provider::YouTube => self.youtube.as_ref(),
            Provider::Instagram => self.instagram.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeywordQuery {
    pub keyword: Option<String>,
}

impl KeywordQuery {
    /// Picks the first non-empty `keyword` out of the raw query pairs.
    pub fn from_params<I>(params: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let keyword = params
            .into_iter()
            .find(|(key, value)| key == "keyword" && !value.is_empty())
            .map(|(_, value)| value);

        Self { keyword }
    }

    /// The caller's keyword, or [`DEFAULT_KEYWORD`] when it is missing or empty.
    pub fn keyword_or_default(&self) -> &str {
        match self.keyword.as_deref() {
            Some(keyword) if !keyword.is_empty() => keyword,
            _ => DEFAULT_KEYWORD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    /// False means every upstream call will be rejected by RapidAPI.
    pub rapidapi_key_configured: bool,
}
