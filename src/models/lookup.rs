use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Reference data rows backing the account form's select inputs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobCategory {
    pub id: Uuid,
    pub symbol: String,
    pub name: String,
}

/// Public projection of a job category; ids stay server-side.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobCategorySummary {
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IndustryCategory {
    pub id: Uuid,
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParticipantType {
    pub id: Uuid,
    pub symbol: String,
    pub name: String,
}
