use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::CandidateProfile;

/// A job seeker's account record as stored in `users`.
/// `experience` and `education` are JSONB arrays owned by the profile editor.
#[derive(Debug, Clone, FromRow)]
pub struct UserProfileRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Value,
    pub education: Value,
    pub accessibility_requirements: Vec<String>,
    pub preferred_industries: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub work_modes: Vec<String>,
    pub experience_level: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserProfileRow {
    /// Projects the account's preferences onto the matching engine's input.
    /// Unknown work modes or experience levels are dropped.
    pub fn to_candidate_profile(&self) -> CandidateProfile {
        CandidateProfile {
            skills: self.skills.clone(),
            accessibility_needs: self.accessibility_requirements.clone(),
            preferred_industries: self.preferred_industries.clone(),
            preferred_work_modes: self
                .work_modes
                .iter()
                .filter_map(|mode| mode.parse().ok())
                .collect(),
            preferred_locations: self.preferred_locations.clone(),
            preferred_experience_level: self
                .experience_level
                .as_deref()
                .and_then(|level| level.parse().ok()),
        }
    }
}
