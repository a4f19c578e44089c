use std::collections::BTreeSet;

use crate::matching::types::{CandidateProfile, ExperienceLevel, WorkMode};

/// Canonical comparison form of a single free-text value: trimmed and
/// lower-cased. Blank input has no token.
pub fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim().to_lowercase();
    (!token.is_empty()).then_some(token)
}

/// Normalizes a free-text list into a set of comparable tokens.
/// Duplicates collapse and input order is discarded.
pub fn normalize<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter_map(|item| normalize_token(item.as_ref()))
        .collect()
}

/// A `CandidateProfile` with every free-text facet normalized once per call,
/// so scoring a catalog does not re-normalize the profile for each job.
///
/// Locations are substring needles, so they are only lower-cased: surrounding
/// whitespace stays significant and an empty needle matches any location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedProfile {
    pub skills: BTreeSet<String>,
    pub accessibility_needs: BTreeSet<String>,
    pub industries: BTreeSet<String>,
    pub work_modes: BTreeSet<WorkMode>,
    pub locations: BTreeSet<String>,
    pub experience_level: Option<ExperienceLevel>,
}

impl NormalizedProfile {
    pub fn from_profile(profile: &CandidateProfile) -> Self {
        Self {
            skills: normalize(&profile.skills),
            accessibility_needs: normalize(&profile.accessibility_needs),
            industries: normalize(&profile.preferred_industries),
            work_modes: profile.preferred_work_modes.iter().copied().collect(),
            locations: profile
                .preferred_locations
                .iter()
                .map(|location| location.to_lowercase())
                .collect(),
            experience_level: profile.preferred_experience_level,
        }
    }
}
