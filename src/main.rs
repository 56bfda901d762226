use tokio::net::TcpListener;
use tracing::{info, warn};
use media_relay::{config::Config, routes::create_router, utils::init_logger, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);
    info!("Upstream providers: {:?}", config.upstream);

    if config.upstream.api_key.is_empty() {
        warn!("RAPIDAPI_KEY is not set, upstream calls will be rejected");
    }

    // Create shared state
    let state = AppState::from_config(config.clone())?;

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
