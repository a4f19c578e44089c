use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::matching::JobPosting;

/// A row of `job_postings`.
#[derive(Debug, Clone, FromRow)]
pub struct JobPostingRow {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub work_mode: Option<String>,
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary_range: Option<String>,
    pub skills_required: Vec<String>,
    pub accessibility_support: Vec<String>,
    pub industry: Option<String>,
    pub summary: Option<String>,
    pub benefits: Vec<String>,
    pub featured: bool,
    pub status: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<JobPostingRow> for JobPosting {
    fn from(row: JobPostingRow) -> Self {
        JobPosting {
            id: row.id,
            skills_required: row.skills_required,
            accessibility_support: row.accessibility_support,
            industry: row.industry,
            work_mode: row.work_mode.as_deref().and_then(|m| m.parse().ok()),
            location: row.location,
            experience_level: row.experience_level.as_deref().and_then(|l| l.parse().ok()),
            title: Some(row.title),
            company: Some(row.company),
            job_type: row.job_type.as_deref().and_then(|t| t.parse().ok()),
            salary_range: row.salary_range,
            summary: row.summary,
            benefits: row.benefits,
            featured: row.featured,
            posted_on: Some(row.created_at.date_naive()),
        }
    }
}
