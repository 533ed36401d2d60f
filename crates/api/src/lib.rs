//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the normalization pipeline
//! - Shared application state (source store, HTTP client)
//! - Error payload mapping

pub mod pipeline;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use pharmadash_ingest::SourceStore;
use pharmadash_shared::AppConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Process-wide source configuration.
    pub store: Arc<SourceStore>,
    /// Shared HTTP client for remote fetches.
    pub client: reqwest::Client,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
