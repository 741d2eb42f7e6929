mod config;
mod dashboard;
mod errors;
mod generation;
mod matching;
mod models;
mod routes;
mod state;
mod submission;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::dashboard::store::Stores;
use crate::routes::build_router;
use crate::state::AppState;
use crate::submission::client::MarketplaceClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchboard API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the marketplace submission client
    let submitter = Arc::new(MarketplaceClient::new(
        config.marketplace_api_url.clone(),
        config.marketplace_api_key.clone(),
        config.submit_timeout_secs,
    ));
    info!(
        "Marketplace client initialized ({})",
        config.marketplace_api_url
    );

    // Dashboard stores are in-memory and owned here; contents are lost on restart
    let stores = Arc::new(Stores::new());

    // Build app state
    let state = AppState {
        config: config.clone(),
        submitter,
        stores,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
