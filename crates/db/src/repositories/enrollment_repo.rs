//! Repository for the `course_enrollments` table.
//!
//! Enroll and cancel are the two write paths that uphold the capacity
//! invariant (`enrolled count <= max_capacity`). Both run as a single
//! transaction that takes `SELECT ... FOR UPDATE` on the course row, so
//! capacity reads and the dependent writes are serialized per course —
//! concurrent cancellations cannot over-admit from the waitlist.

use sqlx::{PgPool, Postgres, Transaction};
use smedir_core::enrollment::{
    admission, validate_cancellation, EnrollmentStatus, ENROLLMENT_CANCELLED, ENROLLMENT_ENROLLED,
    ENROLLMENT_WAITLISTED,
};
use smedir_core::error::CoreError;
use smedir_core::types::DbId;

use crate::models::enrollment::CourseEnrollment;

/// Column list for `course_enrollments` queries.
const COLUMNS: &str =
    "id, course_id, employee_id, status, enrolled_at, cancelled_at, completed_at";

/// Outcome of an enrollment attempt.
#[derive(Debug)]
pub enum EnrollOutcome {
    /// A new or re-activated enrollment; status is `enrolled` or
    /// `waitlisted` depending on capacity.
    Recorded(CourseEnrollment),
    /// The course does not exist.
    CourseNotFound,
    /// The course exists but is not published.
    NotPublished,
    /// The caller already holds an active (non-cancelled) enrollment.
    AlreadyActive(CourseEnrollment),
}

/// Outcome of a cancellation attempt.
#[derive(Debug)]
pub enum CancelOutcome {
    /// The enrollment was cancelled; `promoted` carries the waitlisted
    /// row promoted into the freed slot, when there was one.
    Cancelled {
        enrollment: CourseEnrollment,
        promoted: Option<CourseEnrollment>,
    },
    /// The course does not exist.
    CourseNotFound,
    /// The caller has no enrollment row for this course.
    NoEnrollment,
    /// The row's current status forbids cancellation (already cancelled,
    /// or completed); carries the user-facing reason.
    NotCancellable(CoreError),
}

/// Locked view of the course row taken at the start of both write paths.
#[derive(Debug, sqlx::FromRow)]
struct LockedCourse {
    is_published: bool,
    max_capacity: Option<i32>,
}

/// Provides the capacity-bounded enrollment workflow.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Sign `employee_id` up for `course_id`.
    ///
    /// An existing `cancelled` row is re-activated in place rather than
    /// duplicated; admission falls to the waitlist when the course is at
    /// capacity.
    pub async fn enroll(
        pool: &PgPool,
        course_id: DbId,
        employee_id: DbId,
    ) -> Result<EnrollOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(course) = Self::lock_course(&mut tx, course_id).await? else {
            return Ok(EnrollOutcome::CourseNotFound);
        };
        if !course.is_published {
            return Ok(EnrollOutcome::NotPublished);
        }

        let existing = Self::find_row(&mut tx, course_id, employee_id).await?;

        if let Some(row) = existing {
            match EnrollmentStatus::from_str(&row.status) {
                Ok(EnrollmentStatus::Cancelled) => {
                    let enrolled = Self::count_enrolled(&mut tx, course_id).await?;
                    let status = admission(enrolled, course.max_capacity);
                    let query = format!(
                        "UPDATE course_enrollments \
                         SET status = $2, enrolled_at = NOW(), cancelled_at = NULL \
                         WHERE id = $1 \
                         RETURNING {COLUMNS}"
                    );
                    let row = sqlx::query_as::<_, CourseEnrollment>(&query)
                        .bind(row.id)
                        .bind(status.as_str())
                        .fetch_one(&mut *tx)
                        .await?;
                    tx.commit().await?;
                    return Ok(EnrollOutcome::Recorded(row));
                }
                // Enrolled, waitlisted, and completed rows all block a new
                // sign-up; the handler words the conflict per status.
                _ => return Ok(EnrollOutcome::AlreadyActive(row)),
            }
        }

        let enrolled = Self::count_enrolled(&mut tx, course_id).await?;
        let status = admission(enrolled, course.max_capacity);
        let insert_query = format!(
            "INSERT INTO course_enrollments (course_id, employee_id, status) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CourseEnrollment>(&insert_query)
            .bind(course_id)
            .bind(employee_id)
            .bind(status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(EnrollOutcome::Recorded(row))
    }

    /// Cancel `employee_id`'s enrollment in `course_id`, promoting the
    /// oldest waitlisted row (FIFO by `enrolled_at`) when a slot frees.
    pub async fn cancel(
        pool: &PgPool,
        course_id: DbId,
        employee_id: DbId,
    ) -> Result<CancelOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(course) = Self::lock_course(&mut tx, course_id).await? else {
            return Ok(CancelOutcome::CourseNotFound);
        };

        let Some(row) = Self::find_row(&mut tx, course_id, employee_id).await? else {
            return Ok(CancelOutcome::NoEnrollment);
        };

        if let Ok(status) = EnrollmentStatus::from_str(&row.status) {
            if let Err(reason) = validate_cancellation(status) {
                return Ok(CancelOutcome::NotCancellable(reason));
            }
        }

        let cancel_query = format!(
            "UPDATE course_enrollments \
             SET status = $2, cancelled_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let enrollment = sqlx::query_as::<_, CourseEnrollment>(&cancel_query)
            .bind(row.id)
            .bind(ENROLLMENT_CANCELLED)
            .fetch_one(&mut *tx)
            .await?;

        let promoted = Self::promote_next_waitlisted(&mut tx, course_id, course.max_capacity)
            .await?;

        tx.commit().await?;
        Ok(CancelOutcome::Cancelled {
            enrollment,
            promoted,
        })
    }

    /// Find the (at most one) enrollment row for a (course, employee) pair.
    pub async fn find_for_pair(
        pool: &PgPool,
        course_id: DbId,
        employee_id: DbId,
    ) -> Result<Option<CourseEnrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM course_enrollments \
             WHERE course_id = $1 AND employee_id = $2"
        );
        sqlx::query_as::<_, CourseEnrollment>(&query)
            .bind(course_id)
            .bind(employee_id)
            .fetch_optional(pool)
            .await
    }

    // -- transaction-scoped helpers --------------------------------------

    async fn lock_course(
        tx: &mut Transaction<'_, Postgres>,
        course_id: DbId,
    ) -> Result<Option<LockedCourse>, sqlx::Error> {
        sqlx::query_as::<_, LockedCourse>(
            "SELECT is_published, max_capacity FROM courses WHERE id = $1 FOR UPDATE",
        )
        .bind(course_id)
        .fetch_optional(&mut **tx)
        .await
    }

    async fn find_row(
        tx: &mut Transaction<'_, Postgres>,
        course_id: DbId,
        employee_id: DbId,
    ) -> Result<Option<CourseEnrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM course_enrollments \
             WHERE course_id = $1 AND employee_id = $2"
        );
        sqlx::query_as::<_, CourseEnrollment>(&query)
            .bind(course_id)
            .bind(employee_id)
            .fetch_optional(&mut **tx)
            .await
    }

    async fn count_enrolled(
        tx: &mut Transaction<'_, Postgres>,
        course_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM course_enrollments WHERE course_id = $1 AND status = $2",
        )
        .bind(course_id)
        .bind(ENROLLMENT_ENROLLED)
        .fetch_one(&mut **tx)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Promote the single oldest waitlisted row if capacity allows.
    async fn promote_next_waitlisted(
        tx: &mut Transaction<'_, Postgres>,
        course_id: DbId,
        max_capacity: Option<i32>,
    ) -> Result<Option<CourseEnrollment>, sqlx::Error> {
        let enrolled = Self::count_enrolled(tx, course_id).await?;
        if let Some(capacity) = max_capacity {
            if enrolled >= i64::from(capacity) {
                return Ok(None);
            }
        }

        let promote_query = format!(
            "UPDATE course_enrollments \
             SET status = $2 \
             WHERE id = ( \
                 SELECT id FROM course_enrollments \
                 WHERE course_id = $1 AND status = $3 \
                 ORDER BY enrolled_at ASC \
                 LIMIT 1 \
             ) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseEnrollment>(&promote_query)
            .bind(course_id)
            .bind(ENROLLMENT_ENROLLED)
            .bind(ENROLLMENT_WAITLISTED)
            .fetch_optional(&mut **tx)
            .await
    }
}
