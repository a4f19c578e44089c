//! Axum route handlers for the Matching API.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::skill_gap::{analyze_skill_gap, SkillGapReport};
use crate::matching::{CandidateProfile, JobPosting, ScoredJob};
use crate::profile::{load_profile_row, profile_completion};
use crate::recommendations::dashboard::{build_dashboard, JobSeekerDashboard};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields are kept untyped so shape problems inside the body surface as
/// INVALID_ARGUMENT from the engine rather than as a decode failure.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub profile: Value,
    #[serde(default)]
    pub catalog: Value,
    #[serde(default)]
    pub limit: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    #[serde(default)]
    pub profile: CandidateProfile,
    #[serde(default)]
    pub job: JobPosting,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub user_id: Uuid,
    pub catalog_source: &'static str,
    pub recommendations: Vec<ScoredJob>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches
///
/// Ranks a caller-supplied catalog against a caller-supplied profile.
/// Nothing is loaded from or written to the database.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<Vec<ScoredJob>>, AppError> {
    let Json(request) = payload?;
    let ranked = state
        .engine
        .rank_value(&request.profile, &request.catalog, request.limit.as_ref())?;

    info!(returned = ranked.len(), "Ranked inline catalog");
    Ok(Json(ranked))
}

/// POST /api/v1/skill-gap
///
/// Splits one job's required skills into those the profile covers and those it lacks.
pub async fn handle_skill_gap(
    payload: Result<Json<SkillGapRequest>, JsonRejection>,
) -> Result<Json<SkillGapReport>, AppError> {
    let Json(request) = payload?;
    Ok(Json(analyze_skill_gap(&request.profile, &request.job)))
}

/// GET /api/v1/users/:user_id/recommendations?limit=N
///
/// Ranks the configured catalog against the user's stored preferences.
pub async fn handle_user_recommendations(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let Path(user_id) = path?;
    let Query(params) = query?;
    let limit = params.limit.unwrap_or(state.config.recommendation_limit);
    let recommendations = recommend_for_user(&state, user_id, limit).await?.1;

    Ok(Json(RecommendationsResponse {
        user_id,
        catalog_source: state.catalog.name(),
        recommendations,
    }))
}

/// GET /api/v1/users/:user_id/dashboard
///
/// Profile completion plus the top recommendations rendered as dashboard cards.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<JobSeekerDashboard>, AppError> {
    let Path(user_id) = path?;
    let (completion, recommendations) =
        recommend_for_user(&state, user_id, state.config.recommendation_limit).await?;

    Ok(Json(build_dashboard(user_id, completion, &recommendations)))
}

/// Loads the user's profile and the catalog, then ranks.
/// Returns the profile completion alongside the ranked jobs.
async fn recommend_for_user(
    state: &AppState,
    user_id: Uuid,
    limit: usize,
) -> Result<(u32, Vec<ScoredJob>), AppError> {
    let row = load_profile_row(&state.db, user_id).await?;
    let catalog = state.catalog.load().await?;

    let ranked = state
        .engine
        .rank(&row.to_candidate_profile(), &catalog, limit);

    info!(
        %user_id,
        source = state.catalog.name(),
        catalog_size = catalog.len(),
        returned = ranked.len(),
        "Built job recommendations"
    );

    Ok((profile_completion(&row), ranked))
}
