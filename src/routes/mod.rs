//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/youtube` - Video search, normalized to a URL list
//! - `/instagram` - Social post search, normalized to a URL list
//! - `/api/health` - Health check
//! - everything else - Static file serving (test page)

pub mod health;
pub mod media;
pub mod static_files;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
///
/// API routes take precedence; unmatched paths fall through to the static
/// directory.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .merge(media::router(state.clone()))
        .merge(health::router(state))
        .merge(static_files::router(&static_dir))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ProviderEndpoint};
    use crate::search::{build_http_client, Provider, RapidApiClient, UpstreamClient};
    use crate::types::{AppError, AppResult};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body, Bytes};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Answers every search with a canned body, or a transport error when
    /// none is set, and remembers the keywords it was asked for.
    struct StubClient {
        body: Option<Value>,
        keywords: Mutex<Vec<String>>,
    }

    impl StubClient {
        fn returning(body: Value) -> Arc<Self> {
            Arc::new(Self { body: Some(body), keywords: Mutex::new(Vec::new()) })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { body: None, keywords: Mutex::new(Vec::new()) })
        }

        fn keywords(&self) -> Vec<String> {
            self.keywords.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UpstreamClient for StubClient {
        async fn search(&self, keyword: &str) -> AppResult<Value> {
            self.keywords.lock().unwrap().push(keyword.to_string());
            self.body
                .clone()
                .ok_or_else(|| {
                    AppError::UpstreamTransport("connection refused by 10.0.0.7".to_string())
                })
        }
    }

    fn test_config(static_dir: &Path) -> Config {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.server.static_dir = static_dir.to_path_buf();
        config
    }

    fn app(youtube: Arc<dyn UpstreamClient>, instagram: Arc<dyn UpstreamClient>) -> Router {
        create_router(AppState {
            config: test_config(Path::new("does-not-exist")),
            youtube,
            instagram,
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body)
    }

    fn as_json(body: &Bytes) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn test_youtube_returns_urls_in_order() {
        let youtube = StubClient::returning(json!({"items": [{"url": "a"}, {"url": "b"}]}));
        let app = app(youtube, StubClient::failing());
        let (status, body) = get(app, "/youtube?keyword=cats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body), json!({"youtubeUrls": ["a", "b"]}));
    }

    #[tokio::test]
    async fn test_youtube_empty_items_is_not_found() {
        let youtube = StubClient::returning(json!({"items": []}));
        let (status, body) = get(app(youtube, StubClient::failing()), "/youtube").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(as_json(&body), json!({"error": "No YouTube videos found"}));
    }

    #[tokio::test]
    async fn test_youtube_missing_items_is_server_error() {
        let youtube = StubClient::returning(json!({}));
        let (status, body) = get(app(youtube, StubClient::failing()), "/youtube").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(as_json(&body), json!({"error": "Error fetching YouTube data"}));
    }

    #[tokio::test]
    async fn test_instagram_bare_array() {
        let instagram = StubClient::returning(json!([{"media_url": "x"}]));
        let (status, body) = get(app(StubClient::failing(), instagram), "/instagram").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body), json!({"instagramUrls": ["x"]}));
    }

    #[tokio::test]
    async fn test_instagram_object_fallback() {
        let instagram = StubClient::returning(json!({"items": [{"media_url": "y"}]}));
        let (status, body) = get(app(StubClient::failing(), instagram), "/instagram").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body), json!({"instagramUrls": ["y"]}));
    }

    #[tokio::test]
    async fn test_instagram_empty_is_not_found() {
        let instagram = StubClient::returning(json!([]));
        let (status, body) = get(app(StubClient::failing(), instagram), "/instagram").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(as_json(&body), json!({"error": "No Instagram videos found"}));
    }

    #[tokio::test]
    async fn test_keyword_defaults_to_cute_dogs() {
        let youtube = StubClient::returning(json!({"items": [{"url": "a"}]}));
        let instagram = StubClient::returning(json!([{"media_url": "x"}]));
        let app = app(youtube.clone(), instagram.clone());

        get(app.clone(), "/youtube").await;
        get(app.clone(), "/youtube?keyword=").await;
        get(app.clone(), "/youtube?keyword=red%20pandas").await;
        get(app, "/instagram").await;

        assert_eq!(youtube.keywords(), vec!["cute dogs", "cute dogs", "red pandas"]);
        assert_eq!(instagram.keywords(), vec!["cute dogs"]);
    }

    #[tokio::test]
    async fn test_upstream_failure_does_not_leak_details() {
        let app = app(StubClient::failing(), StubClient::failing());
        let (status, body) = get(app, "/instagram").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(as_json(&body), json!({"error": "Error fetching Instagram data"}));
        assert!(!String::from_utf8_lossy(&body).contains("10.0.0.7"));
    }

    #[tokio::test]
    async fn test_connection_refused_upstream_is_server_error() {
        let config = test_config(Path::new("does-not-exist"));
        let http = build_http_client(&config.upstream).unwrap();
        let unreachable = ProviderEndpoint {
            url: "http://127.0.0.1:1/search".to_string(),
            host: "yt-api.p.rapidapi.com".to_string(),
        };
        let youtube = Arc::new(RapidApiClient::new(http, Provider::YouTube, &unreachable, "key"));

        let (status, body) = get(app(youtube, StubClient::failing()), "/youtube").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(as_json(&body), json!({"error": "Error fetching YouTube data"}));
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        let youtube = StubClient::returning(json!({"items": [{"url": "a"}, {"url": "b"}]}));
        let app = app(youtube, StubClient::failing());

        let first = get(app.clone(), "/youtube?keyword=owls").await;
        let second = get(app, "/youtube?keyword=owls").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_repeated_keyword_still_reaches_upstream() {
        let youtube = StubClient::returning(json!({"items": [{"url": "a"}]}));
        let app = app(youtube.clone(), StubClient::failing());

        let (status, body) = get(app.clone(), "/youtube?keyword=owls&keyword=bats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&body), json!({"youtubeUrls": ["a"]}));

        let (status, body) = get(app, "/instagram?keyword=a&keyword=b").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(as_json(&body), json!({"error": "Error fetching Instagram data"}));

        assert_eq!(youtube.keywords(), vec!["owls"]);
    }

    #[tokio::test]
    async fn test_hung_upstream_is_server_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let config = Config::from_lookup(|key| {
            (key == "UPSTREAM_TIMEOUT_SECS").then(|| "1".to_string())
        })
        .unwrap();
        let http = build_http_client(&config.upstream).unwrap();
        let silent = ProviderEndpoint {
            url: format!("http://{}/search", addr),
            host: "yt-api.p.rapidapi.com".to_string(),
        };
        let youtube = Arc::new(RapidApiClient::new(http, Provider::YouTube, &silent, "key"));

        let (status, body) = get(app(youtube, StubClient::failing()), "/youtube").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(as_json(&body), json!({"error": "Error fetching YouTube data"}));
    }

    #[tokio::test]
    async fn test_health_reports_missing_key() {
        let app = app(StubClient::failing(), StubClient::failing());
        let (status, body) = get(app, "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        let health = as_json(&body);
        assert_eq!(health["status"], "ok");
        assert_eq!(health["rapidapi_key_configured"], false);
    }

    #[tokio::test]
    async fn test_health_reports_configured_key() {
        let mut config = test_config(Path::new("does-not-exist"));
        config.upstream.api_key = "key".to_string();
        let app = create_router(AppState {
            config,
            youtube: StubClient::failing(),
            instagram: StubClient::failing(),
        });

        let (_, body) = get(app, "/api/health").await;
        assert_eq!(as_json(&body)["rapidapi_key_configured"], true);
    }

    #[tokio::test]
    async fn test_static_files() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>media relay</h1>").unwrap();

        let app = create_router(AppState {
            config: test_config(dir.path()),
            youtube: StubClient::failing(),
            instagram: StubClient::failing(),
        });

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");

        let (status, body) = get(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"<h1>media relay</h1>");

        let (status, _) = get(app, "/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
