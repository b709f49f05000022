//! Employee entity model.
//!
//! Rows are created by the external HR sync; this service reads and, at
//! most, deactivates them.

use serde::Serialize;
use sqlx::FromRow;
use smedir_core::types::{DbId, Timestamp};

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department_id: Option<DbId>,
    pub site: Option<String>,
    pub position: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Employee {
    /// "First Last" display name used in notification copy.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
