use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A sellable ticket category. `created_at` defines the base listing
/// order; `quota` caps how many completed transactions it may accumulate.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub early_bird: bool,
    pub quota: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A selling point attached to a ticket (e.g. "Access to all talks").
/// Owned by its ticket, no independent lifecycle.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketFeature {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub feature: String,
    pub created_at: DateTime<Utc>,
}

/// The public shape of a ticket on the listing page. Quota and timestamps
/// stay server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub early_bird: bool,
    pub features: Vec<FeatureSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub id: Uuid,
    pub feature: String,
}
