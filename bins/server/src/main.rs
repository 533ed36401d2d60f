//! Pharmadash API Server
//!
//! Main entry point for the Pharmadash backend service.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pharmadash_api::{AppState, create_router};
use pharmadash_ingest::SourceStore;
use pharmadash_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pharmadash=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Create the source configuration store
    let store = SourceStore::new(
        config.source.remote_url.clone(),
        PathBuf::from(&config.source.local_path),
        Duration::from_secs(config.source.fetch_timeout_secs),
    );
    info!(
        data_source = store.data_source_label(),
        local_path = %config.source.local_path,
        "source configured"
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::new(store),
        client: reqwest::Client::new(),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
