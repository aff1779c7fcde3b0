use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movies_api::app::create_app;
use movies_api::config::settings::AppConfig;
use movies_api::state::AppState;
use movies_api::store::MemoryStore;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new();
    let port = config.server_port;
    let state = AppState::new(config, Arc::new(MemoryStore::new()));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();
    info!("Server running on http://0.0.0.0:{port}");

    axum::serve(listener, app).await.unwrap();
}
