use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::db;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// GET /job-categories — public projection, symbol and name only.
pub async fn job_categories(State(state): State<AppState>) -> Result<Response, AppError> {
    let categories = db::lookups::job_categories_public(&state.pool).await?;
    Ok(success(categories, "Job categories retrieved").into_response())
}

/// GET /industry-categories
pub async fn industry_categories(State(state): State<AppState>) -> Result<Response, AppError> {
    let categories = db::lookups::industry_categories(&state.pool).await?;
    Ok(success(categories, "Industry categories retrieved").into_response())
}

/// GET /participant-types
pub async fn participant_types(State(state): State<AppState>) -> Result<Response, AppError> {
    let types = db::lookups::participant_types(&state.pool).await?;
    Ok(success(types, "Participant types retrieved").into_response())
}
