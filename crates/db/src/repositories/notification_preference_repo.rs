//! Repository for the `notification_preferences` table.

use sqlx::PgPool;
use smedir_core::types::DbId;

use crate::models::notification::{NotificationPreference, UpdatePreferences};

/// Column list for `notification_preferences` queries.
const COLUMNS: &str = "id, employee_id, in_app_enabled, email_enabled, endorsements_enabled, \
    nominations_enabled, profile_changes_enabled, created_at, updated_at";

/// Provides lazy-defaulted access to notification preferences.
pub struct NotificationPreferenceRepo;

impl NotificationPreferenceRepo {
    /// Fetch an employee's preferences, creating the all-enabled default
    /// row on first access.
    pub async fn get_or_create(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<NotificationPreference, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_preferences (employee_id) \
             VALUES ($1) \
             ON CONFLICT ON CONSTRAINT uq_notification_preferences_employee \
             DO UPDATE SET employee_id = EXCLUDED.employee_id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NotificationPreference>(&query)
            .bind(employee_id)
            .fetch_one(pool)
            .await
    }

    /// Update an employee's preference toggles. Absent toggles are left
    /// unchanged. Creates the default row first if none exists.
    pub async fn update(
        pool: &PgPool,
        employee_id: DbId,
        input: &UpdatePreferences,
    ) -> Result<NotificationPreference, sqlx::Error> {
        Self::get_or_create(pool, employee_id).await?;

        let query = format!(
            "UPDATE notification_preferences SET \
                in_app_enabled = COALESCE($2, in_app_enabled), \
                email_enabled = COALESCE($3, email_enabled), \
                endorsements_enabled = COALESCE($4, endorsements_enabled), \
                nominations_enabled = COALESCE($5, nominations_enabled), \
                profile_changes_enabled = COALESCE($6, profile_changes_enabled), \
                updated_at = NOW() \
             WHERE employee_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NotificationPreference>(&query)
            .bind(employee_id)
            .bind(input.in_app_enabled)
            .bind(input.email_enabled)
            .bind(input.endorsements_enabled)
            .bind(input.nominations_enabled)
            .bind(input.profile_changes_enabled)
            .fetch_one(pool)
            .await
    }
}
