//! Course entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use smedir_core::types::{DbId, Timestamp};

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub profile_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub delivery_mode: String,
    pub scheduled_at: Option<Timestamp>,
    pub max_capacity: Option<i32>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A course enriched with its current enrolled count and, when requested
/// for a specific caller, that caller's enrollment status.
#[derive(Debug, Serialize)]
pub struct CourseWithEnrollment {
    #[serde(flatten)]
    pub course: Course,
    pub enrolled_count: i64,
    pub caller_status: Option<String>,
}

/// DTO for creating a course. Courses are published on creation.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub description: Option<String>,
    pub delivery_mode: String,
    pub scheduled_at: Option<Timestamp>,
    pub max_capacity: Option<i32>,
}
