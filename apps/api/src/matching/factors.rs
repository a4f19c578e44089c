//! Factor scorers: six independent comparisons of one profile facet against
//! one job facet.
//!
//! Skill overlap is proportional; every other factor is a binary gate that
//! awards its full ceiling or nothing. Sub-scores stay fractional here and are
//! only rounded once, by the aggregator.

use crate::matching::normalize::{normalize, normalize_token, NormalizedProfile};
use crate::matching::types::JobPosting;

/// Maximum points each factor can contribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorCeilings {
    pub skills: f64,
    pub accessibility: f64,
    pub industry: f64,
    pub work_mode: f64,
    pub location: f64,
    pub experience: f64,
}

/// Production ceilings. They sum to 95, not 100: skills alone can never
/// present as a perfect match while the categorical factors are unmet.
pub const DEFAULT_CEILINGS: FactorCeilings = FactorCeilings {
    skills: 55.0,
    accessibility: 15.0,
    industry: 5.0,
    work_mode: 10.0,
    location: 5.0,
    experience: 5.0,
};

impl FactorCeilings {
    pub fn sum(&self) -> f64 {
        self.skills
            + self.accessibility
            + self.industry
            + self.work_mode
            + self.location
            + self.experience
    }
}

impl Default for FactorCeilings {
    fn default() -> Self {
        DEFAULT_CEILINGS
    }
}

/// Per-factor sub-scores for one (profile, job) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FactorScores {
    pub skills: f64,
    pub accessibility: f64,
    pub industry: f64,
    pub work_mode: f64,
    pub location: f64,
    pub experience: f64,
}

impl FactorScores {
    pub fn total(&self) -> f64 {
        self.skills
            + self.accessibility
            + self.industry
            + self.work_mode
            + self.location
            + self.experience
    }
}

fn gate(hit: bool, ceiling: f64) -> f64 {
    if hit {
        ceiling
    } else {
        0.0
    }
}

/// `ceiling × |required ∩ candidate| / |required|` over normalized sets.
/// A job with no required skills earns nothing here.
pub fn skill_score(profile: &NormalizedProfile, job: &JobPosting, ceiling: f64) -> f64 {
    let required = normalize(&job.skills_required);
    if required.is_empty() {
        return 0.0;
    }
    let matched = required.intersection(&profile.skills).count();
    ceiling * matched as f64 / required.len() as f64
}

pub fn accessibility_score(profile: &NormalizedProfile, job: &JobPosting, ceiling: f64) -> f64 {
    let supported = normalize(&job.accessibility_support);
    gate(!supported.is_disjoint(&profile.accessibility_needs), ceiling)
}

pub fn industry_score(profile: &NormalizedProfile, job: &JobPosting, ceiling: f64) -> f64 {
    let hit = job
        .industry
        .as_deref()
        .and_then(normalize_token)
        .is_some_and(|industry| profile.industries.contains(&industry));
    gate(hit, ceiling)
}

pub fn work_mode_score(profile: &NormalizedProfile, job: &JobPosting, ceiling: f64) -> f64 {
    let hit = job
        .work_mode
        .is_some_and(|mode| profile.work_modes.contains(&mode));
    gate(hit, ceiling)
}

/// Any preferred location appearing inside the job's location text counts.
/// Comparison ignores case only.
pub fn location_score(profile: &NormalizedProfile, job: &JobPosting, ceiling: f64) -> f64 {
    let hit = job.location.as_deref().is_some_and(|location| {
        let location = location.to_lowercase();
        profile
            .locations
            .iter()
            .any(|preferred| location.contains(preferred.as_str()))
    });
    gate(hit, ceiling)
}

pub fn experience_score(profile: &NormalizedProfile, job: &JobPosting, ceiling: f64) -> f64 {
    let hit = matches!(
        (profile.experience_level, job.experience_level),
        (Some(wanted), Some(offered)) if wanted == offered
    );
    gate(hit, ceiling)
}

/// Runs all six scorers for one job.
pub fn score_factors(
    profile: &NormalizedProfile,
    job: &JobPosting,
    ceilings: &FactorCeilings,
) -> FactorScores {
    FactorScores {
        skills: skill_score(profile, job, ceilings.skills),
        accessibility: accessibility_score(profile, job, ceilings.accessibility),
        industry: industry_score(profile, job, ceilings.industry),
        work_mode: work_mode_score(profile, job, ceilings.work_mode),
        location: location_score(profile, job, ceilings.location),
        experience: experience_score(profile, job, ceilings.experience),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::types::{CandidateProfile, ExperienceLevel, WorkMode};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn profile_with(build: impl FnOnce(&mut CandidateProfile)) -> NormalizedProfile {
        let mut profile = CandidateProfile::default();
        build(&mut profile);
        NormalizedProfile::from_profile(&profile)
    }

    #[test]
    fn test_default_ceilings_sum_to_95() {
        assert!((DEFAULT_CEILINGS.sum() - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_skill_score_is_proportional() {
        let profile = profile_with(|p| p.skills = strings(&["react", "TYPESCRIPT"]));
        let job = JobPosting {
            skills_required: strings(&["React", "TypeScript", "ARIA"]),
            ..Default::default()
        };
        let score = skill_score(&profile, &job, 55.0);
        assert!((score - 55.0 * 2.0 / 3.0).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_skill_score_empty_requirements_is_zero() {
        let profile = profile_with(|p| p.skills = strings(&["Rust"]));
        let job = JobPosting::default();
        assert_eq!(skill_score(&profile, &job, 55.0), 0.0);
    }

    #[test]
    fn test_skill_score_collapses_duplicate_requirements() {
        let profile = profile_with(|p| p.skills = strings(&["sql"]));
        let job = JobPosting {
            skills_required: strings(&["SQL", " sql", "Python"]),
            ..Default::default()
        };
        assert!((skill_score(&profile, &job, 55.0) - 27.5).abs() < 1e-9);
    }

    #[test]
    fn test_accessibility_is_binary_gate() {
        let profile = profile_with(|p| {
            p.accessibility_needs = strings(&["Captioning", "screen-reader"])
        });
        let one_overlap = JobPosting {
            accessibility_support: strings(&["captioning", "flex-hours", "voice-control"]),
            ..Default::default()
        };
        let no_overlap = JobPosting {
            accessibility_support: strings(&["step-free-office"]),
            ..Default::default()
        };
        assert_eq!(accessibility_score(&profile, &one_overlap, 15.0), 15.0);
        assert_eq!(accessibility_score(&profile, &no_overlap, 15.0), 0.0);
    }

    #[test]
    fn test_industry_matches_case_insensitively() {
        let profile = profile_with(|p| p.preferred_industries = strings(&["assistive technology"]));
        let job = JobPosting {
            industry: Some("Assistive Technology ".to_string()),
            ..Default::default()
        };
        assert_eq!(industry_score(&profile, &job, 5.0), 5.0);
        assert_eq!(industry_score(&profile, &JobPosting::default(), 5.0), 0.0);
    }

    #[test]
    fn test_work_mode_empty_preference_is_zero() {
        let job = JobPosting {
            work_mode: Some(WorkMode::Remote),
            ..Default::default()
        };
        assert_eq!(work_mode_score(&NormalizedProfile::default(), &job, 10.0), 0.0);

        let profile =
            profile_with(|p| p.preferred_work_modes = vec![WorkMode::Hybrid, WorkMode::Remote]);
        assert_eq!(work_mode_score(&profile, &job, 10.0), 10.0);
    }

    #[test]
    fn test_location_substring_match() {
        let profile = profile_with(|p| p.preferred_locations = strings(&["bengaluru"]));
        let job = JobPosting {
            location: Some("Hybrid - Bengaluru".to_string()),
            ..Default::default()
        };
        assert_eq!(location_score(&profile, &job, 5.0), 5.0);

        let elsewhere = JobPosting {
            location: Some("Gurugram".to_string()),
            ..Default::default()
        };
        assert_eq!(location_score(&profile, &elsewhere, 5.0), 0.0);
    }

    #[test]
    fn test_location_match_keeps_whitespace() {
        let job = JobPosting {
            location: Some("Remote".to_string()),
            ..Default::default()
        };
        let padded = profile_with(|p| p.preferred_locations = strings(&[" Remote "]));
        assert_eq!(location_score(&padded, &job, 5.0), 0.0);

        let upper = profile_with(|p| p.preferred_locations = strings(&["REMOTE"]));
        assert_eq!(location_score(&upper, &job, 5.0), 5.0);
    }

    #[test]
    fn test_empty_preferred_location_matches_any_location() {
        let profile = profile_with(|p| p.preferred_locations = strings(&[""]));
        let job = JobPosting {
            location: Some("Remote".to_string()),
            ..Default::default()
        };
        assert_eq!(location_score(&profile, &job, 5.0), 5.0);
        assert_eq!(location_score(&profile, &JobPosting::default(), 5.0), 0.0);
    }

    #[test]
    fn test_experience_requires_both_sides() {
        let job = JobPosting {
            experience_level: Some(ExperienceLevel::Senior),
            ..Default::default()
        };
        assert_eq!(experience_score(&NormalizedProfile::default(), &job, 5.0), 0.0);

        let senior = profile_with(|p| p.preferred_experience_level = Some(ExperienceLevel::Senior));
        let entry = profile_with(|p| p.preferred_experience_level = Some(ExperienceLevel::Entry));
        assert_eq!(experience_score(&senior, &job, 5.0), 5.0);
        assert_eq!(experience_score(&entry, &job, 5.0), 0.0);
    }

    #[test]
    fn test_score_factors_never_exceed_ceilings() {
        let profile = profile_with(|p| {
            p.skills = strings(&["a", "b"]);
            p.accessibility_needs = strings(&["x"]);
            p.preferred_industries = strings(&["tech"]);
            p.preferred_work_modes = vec![WorkMode::Onsite];
            p.preferred_locations = strings(&["paris"]);
            p.preferred_experience_level = Some(ExperienceLevel::Lead);
        });
        let job = JobPosting {
            skills_required: strings(&["A", "B"]),
            accessibility_support: strings(&["X"]),
            industry: Some("Tech".to_string()),
            work_mode: Some(WorkMode::Onsite),
            location: Some("Paris, FR".to_string()),
            experience_level: Some(ExperienceLevel::Lead),
            ..Default::default()
        };

        let scores = score_factors(&profile, &job, &DEFAULT_CEILINGS);
        assert_eq!(scores.skills, 55.0);
        assert!((scores.total() - 95.0).abs() < 1e-9);
    }
}
