//! Media search endpoints
//!
//! `GET /youtube?keyword=...` and `GET /instagram?keyword=...` each run one
//! upstream search, normalize the body and answer with:
//! - 200 `{"<provider>Urls": [...]}` when at least one URL was found
//! - 404 `{"error": "No <Provider> videos found"}` when none were
//! - 500 `{"error": "Error fetching <Provider> data"}` on any failure

use axum::{
    Router,
    routing::get,
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
    http::StatusCode,
};
use serde_json::{Map, Value};
use crate::models::{AppState, ErrorResponse, KeywordQuery};
use crate::search::{Provider, UpstreamClient};
use tracing::{info, error};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(Provider::YouTube.path(), get(youtube))
        .route(Provider::Instagram.path(), get(instagram))
        .with_state(state)
}

// Raw pairs rather than a struct: a repeated `keyword` must not turn into a 400.
async fn youtube(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let query = KeywordQuery::from_params(params);
    search_media(
        Provider::YouTube,
        state.client(Provider::YouTube),
        query.keyword_or_default(),
    )
    .await
}

async fn instagram(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let query = KeywordQuery::from_params(params);
    search_media(
        Provider::Instagram,
        state.client(Provider::Instagram),
        query.keyword_or_default(),
    )
    .await
}

/// Run one search and map the outcome to the HTTP contract above.
///
/// Failure details are logged here and never reach the response body.
pub async fn search_media(
    provider: Provider,
    client: &dyn UpstreamClient,
    keyword: &str,
) -> Response {
    let result = match client.search(keyword).await {
        Ok(body) => provider.normalize(&body),
        Err(e) => Err(e),
    };

    match result {
        Ok(urls) if !urls.is_empty() => {
            info!(
                provider = %provider,
                keyword = %keyword,
                count = urls.len(),
                "Media search completed"
            );

            let mut body = Map::new();
            body.insert(
                provider.urls_field().to_string(),
                Value::Array(urls.into_iter().map(Value::String).collect()),
            );
            (StatusCode::OK, Json(Value::Object(body))).into_response()
        }
        Ok(_) => {
            info!(provider = %provider, keyword = %keyword, "Media search returned no URLs");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(format!("No {} videos found", provider.name()))),
            ).into_response()
        }
        Err(e) => {
            error!(provider = %provider, keyword = %keyword, error = %e, "Media search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Error fetching {} data", provider.name()))),
            ).into_response()
        }
    }
}
