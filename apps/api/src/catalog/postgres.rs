use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::catalog::CatalogSource;
use crate::errors::AppError;
use crate::matching::JobPosting;
use crate::models::job::JobPostingRow;

/// Active postings, featured first, then newest. `id` makes the order total so
/// tie-breaking in the ranker is reproducible across calls.
const ACTIVE_POSTINGS_SQL: &str = r#"
    SELECT id, title, company, location, work_mode, job_type, experience_level,
           salary_range, skills_required, accessibility_support, industry,
           summary, benefits, featured, status, is_active, created_at
    FROM job_postings
    WHERE status = 'active' AND is_active
    ORDER BY featured DESC, created_at DESC, id
"#;

/// Reads the catalog from the `job_postings` table on every call.
#[derive(Clone)]
pub struct PgCatalog {
    db: PgPool,
}

impl PgCatalog {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogSource for PgCatalog {
    async fn load(&self) -> Result<Vec<JobPosting>, AppError> {
        let rows = sqlx::query_as::<_, JobPostingRow>(ACTIVE_POSTINGS_SQL)
            .fetch_all(&self.db)
            .await?;

        debug!(count = rows.len(), "Loaded active job postings");
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
