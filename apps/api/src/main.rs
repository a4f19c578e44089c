mod catalog;
mod config;
mod db;
mod errors;
mod matching;
mod models;
mod profile;
mod recommendations;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{CatalogSource, PgCatalog, SampleCatalog};
use crate::config::{CatalogBackend, Config};
use crate::db::create_pool;
use crate::matching::MatchingEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job match API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (profiles always; postings when CATALOG_SOURCE=postgres)
    let db = create_pool(&config.database_url, config.db_max_connections).await?;

    let catalog: Arc<dyn CatalogSource> = match config.catalog_backend {
        CatalogBackend::Sample => Arc::new(SampleCatalog),
        CatalogBackend::Postgres => Arc::new(PgCatalog::new(db.clone())),
    };
    info!("Job catalog source: {}", catalog.name());

    let engine = MatchingEngine::new();
    info!(
        "Matching engine ready (factor ceilings sum to {}, default limit {})",
        engine.ceilings().sum(),
        config.recommendation_limit
    );

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        catalog,
        engine,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
