use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::lenient;

// ────────────────────────────────────────────────────────────────────────────
// Categorical values
// ────────────────────────────────────────────────────────────────────────────

/// Returned when a categorical string does not name a known variant.
/// Callers in the matching path turn this into "absent" rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Onsite,
    Remote,
    Hybrid,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Onsite => "onsite",
            WorkMode::Remote => "remote",
            WorkMode::Hybrid => "hybrid",
        }
    }
}

impl FromStr for WorkMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "onsite" => Ok(WorkMode::Onsite),
            "remote" => Ok(WorkMode::Remote),
            "hybrid" => Ok(WorkMode::Hybrid),
            _ => Err(UnknownVariant {
                kind: "work mode",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entry" => Ok(ExperienceLevel::Entry),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            "lead" => Ok(ExperienceLevel::Lead),
            _ => Err(UnknownVariant {
                kind: "experience level",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment type of a posting. Display-only; never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

impl JobType {
    /// Human-facing label used on recommendation cards.
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Freelance => "Freelance",
        }
    }
}

impl FromStr for JobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "internship" => Ok(JobType::Internship),
            "freelance" => Ok(JobType::Freelance),
            _ => Err(UnknownVariant {
                kind: "job type",
                value: s.to_string(),
            }),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine inputs
// ────────────────────────────────────────────────────────────────────────────

/// A job seeker's declared matching preferences.
///
/// Every field is optional on the wire. Missing, `null`, or mistyped values
/// decode to the empty/neutral value so one bad field never rejects a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "lenient::strings")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub accessibility_needs: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub preferred_industries: Vec<String>,
    #[serde(default, deserialize_with = "lenient::parsed_list")]
    pub preferred_work_modes: Vec<WorkMode>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub preferred_locations: Vec<String>,
    #[serde(default, deserialize_with = "lenient::parsed")]
    pub preferred_experience_level: Option<ExperienceLevel>,
}

/// A single job posting from whatever catalog the caller supplies.
///
/// The first block of fields feeds the factor scorers; the rest are carried
/// through untouched for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub skills_required: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub accessibility_support: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient::parsed")]
    pub work_mode: Option<WorkMode>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::parsed")]
    pub experience_level: Option<ExperienceLevel>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::parsed")]
    pub job_type: Option<JobType>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub salary_range: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub benefits: Vec<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub featured: bool,
    #[serde(default, deserialize_with = "lenient::parsed")]
    pub posted_on: Option<NaiveDate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine output
// ────────────────────────────────────────────────────────────────────────────

/// A posting paired with its compatibility score (0 – 100).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_score: u32,
}
