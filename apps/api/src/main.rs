mod allocation;
mod config;
mod dashboard;
mod db;
mod errors;
mod models;
mod routes;
mod state;
mod store;
mod technicians;
mod tickets;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::allocation::scoring::ScoringWeights;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Dispatch v{}", env!("CARGO_PKG_VERSION"));

    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    let store = Store::new(pool);

    let weights = ScoringWeights::default();
    info!(
        "Allocation weights: skill_level x{} open_tickets x{} avg_resolution_time /{}",
        weights.skill_level, weights.open_tickets, weights.resolution_time_divisor
    );

    let state = AppState { store, weights };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
