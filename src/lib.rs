// Media Relay - keyword search over RapidAPI video and social-media providers

pub mod config;
pub mod models;
pub mod types;
pub mod search;    // Upstream clients and response normalization
pub mod routes;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
