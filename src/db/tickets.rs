use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::ticket::{FeatureSummary, TicketSummary};
use crate::models::transaction::STATUS_COMPLETED;
use crate::tickets::QuotaUsage;

#[derive(sqlx::FromRow)]
struct TicketRow {
    id: Uuid,
    name: String,
    price: Decimal,
    description: String,
    early_bird: bool,
}

#[derive(sqlx::FromRow)]
struct FeatureRow {
    id: Uuid,
    ticket_id: Uuid,
    feature: String,
}

/// Reads the listing and the quota aggregate from one transaction, so the
/// sold-out flags are computed against a single snapshot per render.
pub async fn listing_snapshot(
    pool: &PgPool,
) -> Result<(Vec<TicketSummary>, Vec<QuotaUsage>), sqlx::Error> {
    let mut tx = pool.begin().await?;
    let tickets = list_with_features(&mut tx).await?;
    let usage = quota_usage(&mut tx).await?;
    tx.commit().await?;
    Ok((tickets, usage))
}

/// Tickets in creation order, each carrying its features. This is the
/// public listing shape; quota stays server-side.
async fn list_with_features(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<Vec<TicketSummary>, sqlx::Error> {
    let tickets: Vec<TicketRow> = sqlx::query_as(
        "SELECT id, name, price, description, early_bird
           FROM tickets
          ORDER BY created_at ASC",
    )
    .fetch_all(&mut **tx)
    .await?;

    let features: Vec<FeatureRow> = sqlx::query_as(
        "SELECT id, ticket_id, feature
           FROM ticket_features
          ORDER BY created_at ASC",
    )
    .fetch_all(&mut **tx)
    .await?;

    let mut by_ticket: HashMap<Uuid, Vec<FeatureSummary>> = HashMap::new();
    for row in features {
        by_ticket.entry(row.ticket_id).or_default().push(FeatureSummary {
            id: row.id,
            feature: row.feature,
        });
    }

    Ok(tickets
        .into_iter()
        .map(|row| TicketSummary {
            features: by_ticket.remove(&row.id).unwrap_or_default(),
            id: row.id,
            name: row.name,
            price: row.price,
            description: row.description,
            early_bird: row.early_bird,
        })
        .collect())
}

/// Per ticket: its quota and how many transactions have completed against
/// it. Tickets with no transactions count zero.
async fn quota_usage(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<Vec<QuotaUsage>, sqlx::Error> {
    let rows: Vec<(Uuid, i32, i64)> = sqlx::query_as(
        "SELECT t.id, t.quota,
                COUNT(tt.id) FILTER (WHERE tt.status = $1) AS completed
           FROM tickets t
           LEFT JOIN ticket_transactions tt ON tt.ticket_id = t.id
          GROUP BY t.id, t.quota",
    )
    .bind(STATUS_COMPLETED)
    .fetch_all(&mut **tx)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(ticket_id, quota, completed)| QuotaUsage {
            ticket_id,
            quota,
            completed,
        })
        .collect())
}
