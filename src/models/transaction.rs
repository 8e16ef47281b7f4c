use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status value that counts toward a ticket's quota. Transactions are
/// written by the external checkout flow; this server only counts them.
pub const STATUS_COMPLETED: &str = "completed";

#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketTransaction {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
