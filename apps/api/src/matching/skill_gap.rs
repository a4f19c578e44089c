//! Skill gap: which of a job's required skills the candidate already has,
//! and which are missing.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::matching::normalize::{normalize, normalize_token};
use crate::matching::types::{CandidateProfile, JobPosting};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGapReport {
    pub job_id: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub coverage_percent: u32, // 0 – 100
}

/// Partitions the job's required skills into matched and missing, keeping the
/// job's own ordering and spelling. Repeated requirements are reported once.
pub fn analyze_skill_gap(profile: &CandidateProfile, job: &JobPosting) -> SkillGapReport {
    let candidate = normalize(&profile.skills);
    let mut seen = BTreeSet::new();
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for raw in &job.skills_required {
        let Some(token) = normalize_token(raw) else {
            continue;
        };
        if !seen.insert(token.clone()) {
            continue;
        }
        let skill = raw.trim().to_string();
        if candidate.contains(&token) {
            matched_skills.push(skill);
        } else {
            missing_skills.push(skill);
        }
    }

    let required = matched_skills.len() + missing_skills.len();
    let coverage_percent = if required > 0 {
        ((matched_skills.len() as f64 / required as f64) * 100.0).round() as u32
    } else {
        0
    };

    SkillGapReport {
        job_id: job.id.clone(),
        matched_skills,
        missing_skills,
        coverage_percent,
    }
}
