use anyhow::{ensure, Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_YOUTUBE_URL: &str = "https://yt-api.p.rapidapi.com/search";
const DEFAULT_YOUTUBE_HOST: &str = "yt-api.p.rapidapi.com";
const DEFAULT_INSTAGRAM_URL: &str =
    "https://instagram-scraper-api3.p.rapidapi.com/media_by_keyword";
const DEFAULT_INSTAGRAM_HOST: &str = "instagram-scraper-api3.p.rapidapi.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub static_dir: PathBuf,
}

#[derive(Clone)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub youtube: ProviderEndpoint,
    pub instagram: ProviderEndpoint,
}

/// Where a provider lives and which `x-rapidapi-host` it expects.
#[derive(Debug, Clone)]
pub struct ProviderEndpoint {
    pub url: String,
    pub host: String,
}

// Keeps the API key out of startup logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("youtube", &self.youtube)
            .field("instagram", &self.instagram)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults
    /// for every missing key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server: ServerConfig {
                port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
                host: var("HOST", "0.0.0.0"),
                static_dir: PathBuf::from(var("STATIC_DIR", "public")),
            },
            upstream: UpstreamConfig {
                api_key: lookup("RAPIDAPI_KEY").unwrap_or_default(),
                timeout_secs: parse_timeout(&lookup, "UPSTREAM_TIMEOUT_SECS", 15)?,
                connect_timeout_secs: parse_timeout(
                    &lookup,
                    "UPSTREAM_CONNECT_TIMEOUT_SECS",
                    10,
                )?,
                youtube: ProviderEndpoint {
                    url: var("YOUTUBE_API_URL", DEFAULT_YOUTUBE_URL),
                    host: var("YOUTUBE_API_HOST", DEFAULT_YOUTUBE_HOST),
                },
                instagram: ProviderEndpoint {
                    url: var("INSTAGRAM_API_URL", DEFAULT_INSTAGRAM_URL),
                    host: var("INSTAGRAM_API_HOST", DEFAULT_INSTAGRAM_HOST),
                },
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        None => Ok(default),
    }
}

/// A zero timeout would fail every outbound call, so it is rejected up front.
fn parse_timeout<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = parse_var(lookup, key, default)?;
    ensure!(secs > 0, "{} must be at least 1 second", key);
    Ok(secs)
}
