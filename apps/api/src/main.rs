mod config;
mod enhance;
mod errors;
mod models;
mod render;
mod routes;
mod sessions;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhance::HeuristicEnhancer;
use crate::routes::build_router;
use crate::sessions::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    // Heuristic backend until a live one is configured
    let enhancer = Arc::new(HeuristicEnhancer::new(config.enhance_latency));
    info!(
        "Enhancer ready (latency {:?}, timeout {:?})",
        config.enhance_latency, config.enhance_timeout
    );

    let state = AppState {
        sessions: SessionStore::new(),
        enhancer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
