//! Repository for the `notifications` table.

use sqlx::PgPool;
use smedir_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, employee_id, notification_type, title, message, link, related_id, \
    is_read, read_at, created_at";

/// Provides CRUD operations for the notification inbox.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create a notification for an employee, returning the generated ID.
    pub async fn create(pool: &PgPool, input: &CreateNotification) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO notifications \
                (employee_id, notification_type, title, message, link, related_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(input.employee_id)
        .bind(&input.notification_type)
        .bind(&input.title)
        .bind(&input.message)
        .bind(&input.link)
        .bind(input.related_id)
        .fetch_one(pool)
        .await
    }

    /// List notifications for an employee.
    ///
    /// When `unread_only` is `true`, only notifications with
    /// `is_read = false` are returned.
    pub async fn list_for_employee(
        pool: &PgPool,
        employee_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if unread_only {
            "AND is_read = false"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE employee_id = $1 {filter} \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(employee_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark a single notification as read. Idempotent: re-marking an
    /// already-read row succeeds and keeps the original `read_at`.
    ///
    /// Returns `true` if the notification exists for the given employee,
    /// `false` otherwise.
    pub async fn mark_read(
        pool: &PgPool,
        notification_id: DbId,
        employee_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications \
             SET is_read = true, read_at = COALESCE(read_at, NOW()) \
             WHERE id = $1 AND employee_id = $2",
        )
        .bind(notification_id)
        .bind(employee_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark all unread notifications as read for an employee.
    ///
    /// Returns the number of notifications that were marked read.
    pub async fn mark_all_read(pool: &PgPool, employee_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications \
             SET is_read = true, read_at = NOW() \
             WHERE employee_id = $1 AND is_read = false",
        )
        .bind(employee_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Get the number of unread notifications for an employee.
    pub async fn unread_count(pool: &PgPool, employee_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE employee_id = $1 AND is_read = false",
        )
        .bind(employee_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Delete a notification owned by the given employee.
    ///
    /// Returns `true` when a row was deleted.
    pub async fn delete_owned(
        pool: &PgPool,
        notification_id: DbId,
        employee_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND employee_id = $2")
            .bind(notification_id)
            .bind(employee_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
