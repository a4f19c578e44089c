//! Profile source and profile-completion scoring.

pub mod completion;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserProfileRow;

pub use completion::profile_completion;

/// Fetches a job seeker's stored profile.
pub async fn load_profile_row(db: &PgPool, user_id: Uuid) -> Result<UserProfileRow, AppError> {
    sqlx::query_as::<_, UserProfileRow>(
        r#"
        SELECT id, name, email, location, summary, skills, experience, education,
               accessibility_requirements, preferred_industries, preferred_locations,
               work_modes, experience_level, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))
}
