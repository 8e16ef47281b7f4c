use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::user::User;
use crate::schemas::UpdateProfilePayload;

/// Resolves a session token to its attendee, if the token is live.
pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE token = $1")
        .bind(token)
        .fetch_optional(pool)
        .await
}

/// Writes the full account-form payload over the attendee's row.
///
/// Email is the one field an absent value leaves untouched; everything
/// else is overwritten with what the form sent. Returns `None` when the
/// id matches no attendee.
pub async fn update_profile(
    pool: &PgPool,
    payload: &UpdateProfilePayload,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users
            SET avatar = $2,
                first_name = $3,
                last_name = $4,
                display_name = $5,
                email = COALESCE($6, email),
                organisation = $7,
                job_title = $8,
                industry_category_id = $9,
                job_category_id = $10,
                participant_type_id = $11,
                t_shirt_size = $12,
                gender = $13,
                date_of_birth = $14,
                phone = $15,
                bio = $16,
                interest = $17,
                looking_for = $18,
                offering_searching = $19,
                country = $20,
                state = $21,
                city = $22,
                address = $23,
                website = $24,
                github = $25,
                facebook = $26,
                linkedin = $27,
                twitter = $28,
                instagram = $29,
                code_of_conduct = $30,
                public_fields = $31,
                updated_at = now()
          WHERE id = $1
      RETURNING *",
    )
    .bind(payload.id)
    .bind(&payload.avatar)
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.display_name)
    .bind(&payload.email)
    .bind(&payload.organisation)
    .bind(&payload.job_title)
    .bind(payload.industry_category_id)
    .bind(payload.job_category_id)
    .bind(payload.participant_type_id)
    .bind(&payload.t_shirt_size)
    .bind(&payload.gender)
    .bind(&payload.date_of_birth)
    .bind(&payload.phone)
    .bind(&payload.bio)
    .bind(&payload.interest)
    .bind(&payload.looking_for)
    .bind(&payload.offering_searching)
    .bind(&payload.country)
    .bind(&payload.state)
    .bind(&payload.city)
    .bind(&payload.address)
    .bind(&payload.website)
    .bind(&payload.github)
    .bind(&payload.facebook)
    .bind(&payload.linkedin)
    .bind(&payload.twitter)
    .bind(&payload.instagram)
    .bind(payload.compliance.code_of_conduct)
    .bind(Json(&payload.public_fields))
    .fetch_optional(pool)
    .await
}
