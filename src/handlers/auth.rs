use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::schemas::{ForgotPasswordPayload, ResetPasswordPayload, SigninPayload, SignupPayload};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, success};

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<SigninPayload>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let data = state.auth.signin(&payload).await?;

    Ok(success(data, "Signed in").into_response())
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<SignupPayload>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let data = state.auth.signup(&payload).await?;

    Ok(success(data, "Account created").into_response())
}

/// POST /auth/logout
///
/// Sessions are bearer-token; there is no server-side session row to tear
/// down. The client discards its token on this acknowledgement.
pub async fn logout() -> Response {
    empty_success("Signed out").into_response()
}

/// POST /auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordPayload>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let data = state.auth.forgot_password(&payload).await?;

    Ok(success(data, "Reset email requested").into_response())
}

/// POST /auth/reset-password/:token
pub async fn reset_password(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(payload): Json<ResetPasswordPayload>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let data = state.auth.reset_password(&token, &payload).await?;

    Ok(success(data, "Password updated").into_response())
}
