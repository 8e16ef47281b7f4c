use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::db;
use crate::models::lookup::{IndustryCategory, JobCategory, ParticipantType};
use crate::models::user::User;
use crate::schemas::UpdateProfilePayload;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// Everything the account form needs in one load: the profile plus the
/// reference data behind its select inputs.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountPayload {
    user_profile: User,
    industry_categories: Vec<IndustryCategory>,
    job_categories: Vec<JobCategory>,
    participant_types: Vec<ParticipantType>,
}

/// GET /account
pub async fn get_account(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response, AppError> {
    let industry_categories = db::lookups::industry_categories(&state.pool).await?;
    let job_categories = db::lookups::job_categories(&state.pool).await?;
    let participant_types = db::lookups::participant_types(&state.pool).await?;

    Ok(success(
        AccountPayload {
            user_profile: user,
            industry_categories,
            job_categories,
            participant_types,
        },
        "Account retrieved",
    )
    .into_response())
}

/// PUT /account
pub async fn update_account(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<Response, AppError> {
    if payload.id != user.id {
        return Err(AppError::Forbidden(
            "Cannot update another attendee's profile".to_string(),
        ));
    }

    payload.validate()?;

    let updated = db::users::update_profile(&state.pool, &payload)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("User with id '{}' was not found", payload.id))
        })?;

    Ok(success(updated, "Profile updated successfully!").into_response())
}
