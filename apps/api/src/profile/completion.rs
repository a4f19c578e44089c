use serde_json::Value;

use crate::models::user::UserProfileRow;

/// Number of profile fields that count toward completion.
const COMPLETION_FIELDS: u32 = 7;

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn has_entries(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// Percentage (0 – 100) of the core profile fields the user has filled in:
/// name, email, location, summary, skills, experience, education.
pub fn profile_completion(row: &UserProfileRow) -> u32 {
    let filled = [
        has_text(&row.name),
        has_text(&row.email),
        has_text(&row.location),
        has_text(&row.summary),
        !row.skills.is_empty(),
        has_entries(&row.experience),
        has_entries(&row.education),
    ]
    .into_iter()
    .filter(|present| *present)
    .count() as u32;

    ((filled as f64 / COMPLETION_FIELDS as f64) * 100.0).round() as u32
}
