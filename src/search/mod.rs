//! Search Module
//!
//! Keyword search against the two RapidAPI providers:
//! - YouTube (video search) - `items[].url`
//! - Instagram (post search) - `[].media_url` or `items[].media_url`
//!
//! The HTTP side lives in [`rapidapi`], the payload shapes in [`normalize`].

pub mod normalize;
pub mod rapidapi;

pub use normalize::ResponseShape;
pub use rapidapi::{build_http_client, RapidApiClient};

use crate::types::AppResult;
use async_trait::async_trait;
use serde_json::Value;

/// One outbound search call returning the provider's raw JSON body.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn search(&self, keyword: &str) -> AppResult<Value>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    YouTube,
    Instagram,
}

impl Provider {
    /// Human-readable name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::YouTube => "YouTube",
            Provider::Instagram => "Instagram",
        }
    }

    /// JSON field holding the URL list in a successful response.
    pub fn urls_field(&self) -> &'static str {
        match self {
            Provider::YouTube => "youtubeUrls",
            Provider::Instagram => "instagramUrls",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Provider::YouTube => "/youtube",
            Provider::Instagram => "/instagram",
        }
    }

    pub fn normalize(&self, body: &Value) -> AppResult<Vec<String>> {
        match self {
            Provider::YouTube => normalize::youtube_urls(body),
            Provider::Instagram => normalize::instagram_urls(body),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::YouTube => write!(f, "youtube"),
            Provider::Instagram => write!(f, "instagram"),
        }
    }
}
