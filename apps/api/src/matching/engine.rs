#![allow(dead_code)]

//! Matching engine: the single entry point over normalizer → factor scorers →
//! aggregator → ranker.
//!
//! Pure and synchronous: no I/O, no logging, no state carried between calls.
//! One `MatchingEngine` can be shared freely across request handlers.

use serde_json::Value;

use crate::matching::aggregate::aggregate;
use crate::matching::error::MatchError;
use crate::matching::factors::{score_factors, FactorCeilings, FactorScores, DEFAULT_CEILINGS};
use crate::matching::normalize::NormalizedProfile;
use crate::matching::ranker::{select_top, DEFAULT_LIMIT};
use crate::matching::types::{CandidateProfile, JobPosting, ScoredJob};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingEngine {
    ceilings: FactorCeilings,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::with_ceilings(DEFAULT_CEILINGS)
    }

    pub fn with_ceilings(ceilings: FactorCeilings) -> Self {
        Self { ceilings }
    }

    pub fn ceilings(&self) -> &FactorCeilings {
        &self.ceilings
    }

    /// Per-factor breakdown for one job, before aggregation.
    pub fn factor_scores(&self, profile: &CandidateProfile, job: &JobPosting) -> FactorScores {
        score_factors(&NormalizedProfile::from_profile(profile), job, &self.ceilings)
    }

    /// Integer match score (0 – 100) for one job.
    pub fn score(&self, profile: &CandidateProfile, job: &JobPosting) -> u32 {
        aggregate(&self.factor_scores(profile, job))
    }

    /// Scores every posting in `catalog` and returns the best `limit`,
    /// highest first, ties in catalog order.
    pub fn rank(
        &self,
        profile: &CandidateProfile,
        catalog: &[JobPosting],
        limit: usize,
    ) -> Vec<ScoredJob> {
        if limit == 0 || catalog.is_empty() {
            return Vec::new();
        }

        let normalized = NormalizedProfile::from_profile(profile);
        let scored = catalog
            .iter()
            .map(|job| ScoredJob {
                job: job.clone(),
                match_score: aggregate(&score_factors(&normalized, job, &self.ceilings)),
            })
            .collect();

        select_top(scored, limit)
    }

    /// Ranks untyped JSON input.
    ///
    /// The profile must be an object, the catalog an array of objects and the
    /// limit (if given) a non-negative integer. Shape is checked in full
    /// before anything is scored. Field contents inside those records are
    /// decoded leniently and never fail.
    pub fn rank_value(
        &self,
        profile: &Value,
        catalog: &Value,
        limit: Option<&Value>,
    ) -> Result<Vec<ScoredJob>, MatchError> {
        if !profile.is_object() {
            return Err(MatchError::InvalidArgument(format!(
                "profile must be a JSON object, got {}",
                json_kind(profile)
            )));
        }

        let entries = catalog.as_array().ok_or_else(|| {
            MatchError::InvalidArgument(format!(
                "catalog must be a JSON array, got {}",
                json_kind(catalog)
            ))
        })?;

        if let Some((index, entry)) = entries.iter().enumerate().find(|(_, e)| !e.is_object()) {
            return Err(MatchError::InvalidArgument(format!(
                "catalog[{index}] must be a JSON object, got {}",
                json_kind(entry)
            )));
        }

        let limit = match limit {
            None | Some(Value::Null) => DEFAULT_LIMIT,
            Some(value) => value
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| {
                    MatchError::InvalidArgument(format!(
                        "limit must be a non-negative integer, got {value}"
                    ))
                })?,
        };

        let profile: CandidateProfile = serde_json::from_value(profile.clone())
            .map_err(|e| MatchError::InvalidArgument(format!("profile: {e}")))?;

        let catalog = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<JobPosting>(entry.clone())
                    .map_err(|e| MatchError::InvalidArgument(format!("catalog[{index}]: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.rank(&profile, &catalog, limit))
    }
}

/// Ranks with the production ceilings.
pub fn rank(profile: &CandidateProfile, catalog: &[JobPosting], limit: usize) -> Vec<ScoredJob> {
    MatchingEngine::new().rank(profile, catalog, limit)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::types::{ExperienceLevel, WorkMode};
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn scenario_profile() -> CandidateProfile {
        CandidateProfile {
            skills: strings(&["React", "TypeScript"]),
            accessibility_needs: vec![],
            preferred_industries: strings(&["Healthcare"]),
            preferred_work_modes: vec![WorkMode::Remote],
            preferred_locations: strings(&["Remote"]),
            preferred_experience_level: Some(ExperienceLevel::Mid),
        }
    }

    fn scenario_job() -> JobPosting {
        JobPosting {
            id: "job-a".to_string(),
            skills_required: strings(&["React", "TypeScript", "ARIA"]),
            accessibility_support: strings(&["screen-reader"]),
            industry: Some("Technology".to_string()),
            work_mode: Some(WorkMode::Remote),
            location: Some("Remote".to_string()),
            experience_level: Some(ExperienceLevel::Mid),
            ..Default::default()
        }
    }

    /// A job whose only scoring factor is skill overlap with `skills`.
    fn skill_job(id: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            skills_required: strings(skills),
            ..Default::default()
        }
    }

    fn ids(jobs: &[ScoredJob]) -> Vec<&str> {
        jobs.iter().map(|j| j.job.id.as_str()).collect()
    }

    #[test]
    fn test_concrete_scenario_scores_57() {
        let engine = MatchingEngine::new();
        let factors = engine.factor_scores(&scenario_profile(), &scenario_job());
        assert!((factors.skills - 55.0 * 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(factors.accessibility, 0.0);
        assert_eq!(factors.industry, 0.0);
        assert_eq!(factors.work_mode, 10.0);
        assert_eq!(factors.location, 5.0);
        assert_eq!(factors.experience, 5.0);
        assert_eq!(engine.score(&scenario_profile(), &scenario_job()), 57);
    }

    #[test]
    fn test_empty_skill_requirements_contribute_nothing() {
        let profile = CandidateProfile {
            skills: strings(&["Rust"]),
            ..Default::default()
        };
        let job = skill_job("none", &[]);
        let engine = MatchingEngine::new();
        assert_eq!(engine.factor_scores(&profile, &job).skills, 0.0);
        assert_eq!(engine.score(&profile, &job), 0);
    }

    #[test]
    fn test_scores_are_bounded() {
        let profile = scenario_profile();
        let catalog = vec![
            scenario_job(),
            JobPosting::default(),
            skill_job("all", &["react", "typescript"]),
        ];
        for job in rank(&profile, &catalog, 10) {
            assert!(job.match_score <= 100, "Score was {}", job.match_score);
        }
    }

    #[test]
    fn test_clamp_guards_oversized_ceilings() {
        let engine = MatchingEngine::with_ceilings(FactorCeilings {
            skills: 80.0,
            accessibility: 40.0,
            ..DEFAULT_CEILINGS
        });
        let profile = CandidateProfile {
            skills: strings(&["a"]),
            accessibility_needs: strings(&["b"]),
            ..Default::default()
        };
        let job = JobPosting {
            skills_required: strings(&["a"]),
            accessibility_support: strings(&["b"]),
            ..Default::default()
        };
        assert_eq!(engine.score(&profile, &job), 100);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let profile = scenario_profile();
        let catalog = vec![
            skill_job("one", &["react"]),
            scenario_job(),
            skill_job("two", &["react", "go"]),
            skill_job("three", &["react"]),
        ];
        let first = rank(&profile, &catalog, 3);
        let second = rank(&profile, &catalog, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_adding_matching_skill_never_lowers_score() {
        let job = scenario_job();
        let mut profile = CandidateProfile::default();
        let mut previous = MatchingEngine::new().score(&profile, &job);

        for skill in ["Go", "React", "TypeScript", "ARIA"] {
            profile.skills.push(skill.to_string());
            let current = MatchingEngine::new().score(&profile, &job);
            assert!(current >= previous, "{skill}: {current} < {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_zero_limit_returns_empty() {
        assert!(rank(&scenario_profile(), &[scenario_job()], 0).is_empty());
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        assert!(rank(&scenario_profile(), &[], DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_top_five_of_seven_with_ties() {
        // k of 11 required skills scores exactly 5k: 55, 40, 40, 30, 20, 20, 20.
        let all: Vec<String> = (0..11).map(|i| format!("s{i}")).collect();
        let profile = CandidateProfile {
            skills: all.clone(),
            ..Default::default()
        };
        let job = |id: &str, matched: usize| JobPosting {
            id: id.to_string(),
            skills_required: all[..matched]
                .iter()
                .cloned()
                .chain((matched..11).map(|i| format!("missing{i}")))
                .collect(),
            ..Default::default()
        };
        let catalog = vec![
            job("best", 11),
            job("second-a", 8),
            job("second-b", 8),
            job("third", 6),
            job("fourth-a", 4),
            job("fourth-b", 4),
            job("fourth-c", 4),
        ];

        let top = rank(&profile, &catalog, 5);
        assert_eq!(
            ids(&top),
            vec!["best", "second-a", "second-b", "third", "fourth-a"]
        );
        assert_eq!(top[1].match_score, top[2].match_score);
    }

    #[test]
    fn test_rank_does_not_mutate_catalog() {
        let catalog = vec![skill_job("b", &["x"]), skill_job("a", &["react"])];
        let snapshot = catalog.clone();
        let _ = rank(&scenario_profile(), &catalog, 5);
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn test_rank_value_scores_json_input() {
        let ranked = MatchingEngine::new()
            .rank_value(
                &json!({
                    "skills": ["React", "TypeScript"],
                    "preferred_work_modes": ["remote"],
                    "preferred_locations": ["Remote"],
                    "preferred_experience_level": "mid",
                }),
                &json!([
                    {"id": "empty"},
                    {
                        "id": "job-a",
                        "skills_required": ["React", "TypeScript", "ARIA"],
                        "accessibility_support": ["screen-reader"],
                        "industry": "Technology",
                        "work_mode": "remote",
                        "location": "Remote",
                        "experience_level": "mid",
                    },
                ]),
                None,
            )
            .unwrap();

        assert_eq!(ids(&ranked), vec!["job-a", "empty"]);
        assert_eq!(ranked[0].match_score, 57);
        assert_eq!(ranked[1].match_score, 0);
    }

    #[test]
    fn test_rank_value_rejects_non_array_catalog() {
        let err = MatchingEngine::new()
            .rank_value(&json!({}), &json!({"id": "x"}), None)
            .unwrap_err();
        assert!(matches!(err, MatchError::InvalidArgument(ref msg) if msg.contains("catalog")));
    }

    #[test]
    fn test_rank_value_rejects_non_object_profile() {
        let err = MatchingEngine::new()
            .rank_value(&json!(["React"]), &json!([]), None)
            .unwrap_err();
        assert!(matches!(err, MatchError::InvalidArgument(ref msg) if msg.contains("profile")));
    }

    #[test]
    fn test_rank_value_rejects_non_object_entry() {
        let err = MatchingEngine::new()
            .rank_value(&json!({}), &json!([{"id": "ok"}, "bad"]), None)
            .unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidArgument("catalog[1] must be a JSON object, got string".to_string())
        );
    }

    #[test]
    fn test_rank_value_rejects_negative_limit() {
        let err = MatchingEngine::new()
            .rank_value(&json!({}), &json!([]), Some(&json!(-1)))
            .unwrap_err();
        assert!(matches!(err, MatchError::InvalidArgument(ref msg) if msg.contains("limit")));
    }

    #[test]
    fn test_rank_value_zero_limit_and_null_fields() {
        let engine = MatchingEngine::new();
        let catalog = json!([{"id": "a", "skills_required": null, "work_mode": 3}]);

        let none = engine
            .rank_value(&json!({"skills": null}), &catalog, Some(&json!(0)))
            .unwrap();
        assert!(none.is_empty());

        let all = engine
            .rank_value(&json!({"skills": null}), &catalog, Some(&Value::Null))
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].match_score, 0);
    }
}
