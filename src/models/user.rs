use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Which profile fields an attendee has opted to show publicly.
/// Everything defaults to private.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldVisibility {
    pub email: bool,
    pub company: bool,
    pub gender: bool,
    pub phone: bool,
    pub looking_for: bool,
    pub job_categories: bool,
    pub address: bool,
    pub socials: bool,
}

/// An attendee profile. The session `token` is issued by the identity
/// service and is never serialized back to clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub organisation: Option<String>,
    pub job_title: Option<String>,
    pub industry_category_id: Option<Uuid>,
    pub job_category_id: Option<Uuid>,
    pub participant_type_id: Option<Uuid>,
    pub t_shirt_size: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub interest: Option<String>,
    pub looking_for: Option<String>,
    pub offering_searching: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub code_of_conduct: bool,
    pub public_fields: Json<FieldVisibility>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
