//! HTTP server setup and routing

use crate::config::EmbedConfig;
use crate::error::{Error, Result};
use crate::fetchers::Upstream;
use crate::handlers;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: Upstream,
}

impl AppState {
    pub fn new(config: &EmbedConfig) -> Result<Self> {
        Ok(Self {
            upstream: Upstream::new(config)?,
        })
    }
}

/// Builds the router with every route and the CORS layer
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/docs", get(handlers::docs))
        .route("/health", get(handlers::health))
        .route("/chapters/:slug", get(handlers::chapter))
        .route("/images/:slug", get(handlers::image))
        .with_state(state)
        // Any origin, no credentials
        .layer(CorsLayer::permissive())
}

/// Binds the configured address and serves until the process exits
pub async fn run(config: EmbedConfig) -> Result<()> {
    config.validate()?;
    let state = AppState::new(&config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| Error::Http(format!("Failed to bind to {}: {}", config.bind_addr, e)))?;

    ::log::info!(
        "Serving previews on {} for upstream {}",
        config.bind_addr,
        config.upstream_base
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Http(format!("Server error: {}", e)))?;

    Ok(())
}
