//! Nomination entity model.

use serde::Serialize;
use sqlx::FromRow;
use smedir_core::types::{DbId, Timestamp};

/// A row from the `nominations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Nomination {
    pub id: DbId,
    pub nominee_id: DbId,
    pub nominator_id: DbId,
    /// The nominee's department name, snapshotted at nomination time.
    pub department_name: Option<String>,
    pub status: String,
    pub decision_note: Option<String>,
    pub requested_at: Timestamp,
    pub decided_at: Option<Timestamp>,
}
