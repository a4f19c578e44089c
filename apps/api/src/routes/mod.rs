pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendations::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matches", post(handlers::handle_match))
        .route("/api/v1/skill-gap", post(handlers::handle_skill_gap))
        .route(
            "/api/v1/users/:user_id/recommendations",
            get(handlers::handle_user_recommendations),
        )
        .route(
            "/api/v1/users/:user_id/dashboard",
            get(handlers::handle_dashboard),
        )
        .with_state(state)
}
