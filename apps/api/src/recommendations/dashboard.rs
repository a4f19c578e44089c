use chrono::{NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::matching::{JobType, ScoredJob};

/// Compact view of a recommended job for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedJobCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub match_score: u32,
    pub posted_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobSeekerDashboard {
    pub user_id: Uuid,
    pub profile_completion: u32,
    pub recommended_jobs: Vec<RecommendedJobCard>,
}

impl RecommendedJobCard {
    /// Postings without a publish date are shown as posted `today`.
    pub fn from_scored(scored: &ScoredJob, today: NaiveDate) -> Self {
        let job = &scored.job;
        Self {
            id: job.id.clone(),
            title: job.title.clone().unwrap_or_default(),
            company: job.company.clone().unwrap_or_default(),
            location: job.location.clone().unwrap_or_default(),
            job_type: job.job_type.unwrap_or(JobType::FullTime).label().to_string(),
            salary: job.salary_range.clone(),
            match_score: scored.match_score,
            posted_date: job.posted_on.unwrap_or(today),
        }
    }
}

pub fn build_dashboard(
    user_id: Uuid,
    profile_completion: u32,
    recommendations: &[ScoredJob],
) -> JobSeekerDashboard {
    let today = Utc::now().date_naive();
    JobSeekerDashboard {
        user_id,
        profile_completion,
        recommended_jobs: recommendations
            .iter()
            .map(|scored| RecommendedJobCard::from_scored(scored, today))
            .collect(),
    }
}
