//! Static File Serving
//!
//! Serves the test page and any other assets from the configured static
//! directory (`public` by default) for every path no API route matched.

use axum::Router;
use tower_http::services::ServeDir;
use std::path::Path;
use tracing::{info, warn};

/// Create router for serving static files
pub fn router(static_dir: &Path) -> Router {
    if static_dir.is_dir() {
        info!(path = %static_dir.display(), "Serving static files");
    } else {
        // Requests will simply 404
        warn!(path = %static_dir.display(), "Static files directory not found");
    }

    let serve_dir = ServeDir::new(static_dir)
        .append_index_html_on_directories(true);

    Router::new()
        .fallback_service(serve_dir)
}
