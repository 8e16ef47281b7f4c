//! Axum extractors that resolve the `Authorization: Bearer <token>` header
//! to an attendee row. Tokens are issued by the identity service at sign-in
//! and stored on the attendee's profile.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::db;
use crate::models::user::User;
use crate::state::AppState;
use crate::utils::error::AppError;

/// Extractor for routes that require a signed-in attendee. Rejects with
/// 401 when the header is missing or the token matches nobody.
pub struct CurrentUser(pub User);

/// Extractor for routes that only personalize when a session is present,
/// like the ticket listing. Never rejects; lookup failures degrade to an
/// anonymous visitor.
pub struct OptionalUser(pub Option<User>);

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::AuthError("Missing bearer token".to_string()))?;

        let user = db::users::find_by_token(&state.pool, token)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid or expired session".to_string()))?;

        tracing::debug!(user_id = %user.id, "Session resolved");

        Ok(Self(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(Self(None));
        };

        match db::users::find_by_token(&state.pool, token).await {
            Ok(user) => Ok(Self(user)),
            Err(e) => {
                // An anonymous render beats failing the whole page.
                tracing::warn!(error = ?e, "Session lookup failed");
                Ok(Self(None))
            }
        }
    }
}
