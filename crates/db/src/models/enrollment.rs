//! Course enrollment entity model.

use serde::Serialize;
use sqlx::FromRow;
use smedir_core::types::{DbId, Timestamp};

/// A row from the `course_enrollments` table.
///
/// At most one row exists per (course, employee) pair; cancellation and
/// re-enrollment reuse the same row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseEnrollment {
    pub id: DbId,
    pub course_id: DbId,
    pub employee_id: DbId,
    pub status: String,
    pub enrolled_at: Timestamp,
    pub cancelled_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}
