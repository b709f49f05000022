//! Notification entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use smedir_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub employee_id: DbId,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub related_id: Option<DbId>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Input for inserting a notification row.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub employee_id: DbId,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub related_id: Option<DbId>,
}

/// A row from the `notification_preferences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationPreference {
    pub id: DbId,
    pub employee_id: DbId,
    pub in_app_enabled: bool,
    pub email_enabled: bool,
    pub endorsements_enabled: bool,
    pub nominations_enabled: bool,
    pub profile_changes_enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating notification preferences. Absent toggles are left
/// unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdatePreferences {
    pub in_app_enabled: Option<bool>,
    pub email_enabled: Option<bool>,
    pub endorsements_enabled: Option<bool>,
    pub nominations_enabled: Option<bool>,
    pub profile_changes_enabled: Option<bool>,
}
