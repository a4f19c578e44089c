//! Job catalog sources.
//!
//! The matching engine never fetches postings itself; handlers ask the
//! configured `CatalogSource` for a catalog and pass it in as plain data.
//! `AppState` holds an `Arc<dyn CatalogSource>`, chosen at startup via config.

pub mod postgres;
pub mod sample;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::JobPosting;

pub use postgres::PgCatalog;
pub use sample::SampleCatalog;

/// Supplies the catalog for one ranking call. Order is significant: the ranker
/// breaks score ties by catalog position.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<JobPosting>, AppError>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}
