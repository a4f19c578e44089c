use std::cmp::Reverse;

use crate::matching::types::ScoredJob;

/// Number of results returned when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: usize = 5;

/// Orders jobs by `match_score` descending and keeps the first `limit`.
///
/// The sort is stable: equal scores keep their catalog order.
pub fn select_top(mut scored: Vec<ScoredJob>, limit: usize) -> Vec<ScoredJob> {
    scored.sort_by_key(|job| Reverse(job.match_score));
    scored.truncate(limit);
    scored
}
