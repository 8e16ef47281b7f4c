use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::schemas::{ForgotPasswordPayload, ResetPasswordPayload, SigninPayload, SignupPayload};
use crate::utils::error::AppError;

/// Client for the external identity service that owns credentials.
///
/// This server never sees password hashes. Credential flows are forwarded
/// to the service; the profile rows it maintains (including the session
/// token it issues) land in the shared database and are read back here.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    /// `base_url` must carry its trailing slash; endpoint paths are
    /// appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Exchanges credentials for a profile and session token. Upstream
    /// 401 and 404 map to the messages the login form shows.
    pub async fn signin(&self, payload: &SigninPayload) -> Result<Value, AppError> {
        let res = self
            .post("auth/signin", &json!({
                "email": payload.email,
                "password": payload.password,
            }))
            .await?;

        match res.status() {
            s if s.is_success() => Self::read_json(res).await,
            StatusCode::UNAUTHORIZED => {
                Err(AppError::AuthError("Wrong email or password".to_string()))
            }
            StatusCode::NOT_FOUND => Err(AppError::NotFound("User not found".to_string())),
            _ => Err(AppError::ExternalServiceError("Something's wrong".to_string())),
        }
    }

    /// Creates an account. Upstream rejections (duplicate email, weak
    /// password) pass through with the service's own message.
    pub async fn signup(&self, payload: &SignupPayload) -> Result<Value, AppError> {
        let res = self
            .post("auth/signup", &json!({
                "firstName": payload.first_name,
                "lastName": payload.last_name,
                "email": payload.email,
                "password": payload.password,
            }))
            .await?;

        if res.status().is_success() {
            return Self::read_json(res).await;
        }

        let status = res.status();
        let message = Self::upstream_message(res).await;
        if status.is_client_error() {
            Err(AppError::ValidationError(message))
        } else {
            Err(AppError::ExternalServiceError(message))
        }
    }

    pub async fn forgot_password(&self, payload: &ForgotPasswordPayload) -> Result<Value, AppError> {
        let res = self
            .post("auth/forgot-password", &json!({ "email": payload.email }))
            .await?;

        if res.status().is_success() {
            Self::read_json(res).await
        } else {
            Err(AppError::ExternalServiceError(Self::upstream_message(res).await))
        }
    }

    pub async fn reset_password(
        &self,
        token: &str,
        payload: &ResetPasswordPayload,
    ) -> Result<Value, AppError> {
        let res = self
            .post("auth/reset-password", &json!({
                "token": token,
                "password": payload.password,
            }))
            .await?;

        if res.status().is_success() {
            Self::read_json(res).await
        } else {
            Err(AppError::ExternalServiceError(Self::upstream_message(res).await))
        }
    }

    async fn post(&self, path: &str, body: &Value) -> Result<reqwest::Response, AppError> {
        self.http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))
    }

    async fn read_json(res: reqwest::Response) -> Result<Value, AppError> {
        res.json()
            .await
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))
    }

    /// Best-effort extraction of a human-readable message from an upstream
    /// error body.
    async fn upstream_message(res: reqwest::Response) -> String {
        let body: Value = res.json().await.unwrap_or(Value::Null);
        body.get("message")
            .and_then(Value::as_str)
            .unwrap_or("Something's wrong")
            .to_string()
    }
}
