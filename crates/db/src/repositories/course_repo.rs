//! Repository for the `courses` table.

use sqlx::PgPool;
use smedir_core::enrollment::ENROLLMENT_ENROLLED;
use smedir_core::types::DbId;

use crate::models::course::{Course, CourseWithEnrollment, CreateCourse};
use crate::repositories::enrollment_repo::EnrollmentRepo;

/// Column list for `courses` queries.
const COLUMNS: &str = "id, profile_id, title, description, delivery_mode, scheduled_at, \
    max_capacity, is_published, created_at, updated_at";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course for the owning profile. Courses are published
    /// on creation.
    pub async fn create(
        pool: &PgPool,
        profile_id: DbId,
        input: &CreateCourse,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses \
                (profile_id, title, description, delivery_mode, scheduled_at, max_capacity) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(profile_id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(&input.delivery_mode)
            .bind(input.scheduled_at)
            .bind(input.max_capacity)
            .fetch_one(pool)
            .await
    }

    /// Find a course by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List published courses, soonest-scheduled first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses WHERE is_published = true \
             ORDER BY scheduled_at ASC NULLS LAST, created_at DESC"
        );
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Current count of `enrolled` rows for a course.
    pub async fn enrolled_count(pool: &PgPool, course_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM course_enrollments WHERE course_id = $1 AND status = $2",
        )
        .bind(course_id)
        .bind(ENROLLMENT_ENROLLED)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Enrich a course with its enrolled count and the caller's enrollment
    /// status, if any.
    pub async fn with_enrollment(
        pool: &PgPool,
        course: Course,
        caller_id: DbId,
    ) -> Result<CourseWithEnrollment, sqlx::Error> {
        let enrolled_count = Self::enrolled_count(pool, course.id).await?;
        let caller_status = EnrollmentRepo::find_for_pair(pool, course.id, caller_id)
            .await?
            .map(|row| row.status);

        Ok(CourseWithEnrollment {
            course,
            enrolled_count,
            caller_status,
        })
    }

    /// Delete a course if it belongs to `profile_id`.
    ///
    /// Returns `true` when a row was deleted.
    pub async fn delete_owned(
        pool: &PgPool,
        course_id: DbId,
        profile_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1 AND profile_id = $2")
            .bind(course_id)
            .bind(profile_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
