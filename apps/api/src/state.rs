use std::sync::Arc;

use sqlx::PgPool;

use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::matching::MatchingEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Job catalog backing the per-user endpoints. Chosen at startup via CATALOG_SOURCE.
    pub catalog: Arc<dyn CatalogSource>,
    pub engine: MatchingEngine,
}
