use sqlx::PgPool;

use crate::models::lookup::{IndustryCategory, JobCategory, JobCategorySummary, ParticipantType};

/// The public job-category projection: symbol and name only.
pub async fn job_categories_public(
    pool: &PgPool,
) -> Result<Vec<JobCategorySummary>, sqlx::Error> {
    sqlx::query_as::<_, JobCategorySummary>(
        "SELECT symbol, name FROM job_categories ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn job_categories(pool: &PgPool) -> Result<Vec<JobCategory>, sqlx::Error> {
    sqlx::query_as::<_, JobCategory>("SELECT id, symbol, name FROM job_categories ORDER BY name ASC")
        .fetch_all(pool)
        .await
}

pub async fn industry_categories(pool: &PgPool) -> Result<Vec<IndustryCategory>, sqlx::Error> {
    sqlx::query_as::<_, IndustryCategory>(
        "SELECT id, symbol, name FROM industry_categories ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn participant_types(pool: &PgPool) -> Result<Vec<ParticipantType>, sqlx::Error> {
    sqlx::query_as::<_, ParticipantType>(
        "SELECT id, symbol, name FROM participant_types ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await
}
