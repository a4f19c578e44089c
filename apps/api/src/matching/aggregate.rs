use crate::matching::factors::FactorScores;

pub const MIN_MATCH_SCORE: f64 = 0.0;
pub const MAX_MATCH_SCORE: f64 = 100.0;

/// Sums the factor sub-scores, clamps to `[0, 100]` and rounds half-up to
/// the integer match score.
pub fn aggregate(scores: &FactorScores) -> u32 {
    let total = scores.total().clamp(MIN_MATCH_SCORE, MAX_MATCH_SCORE);
    (total + 0.5).floor() as u32
}
