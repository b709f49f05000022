//! Handlers for course enrollment and cancellation.
//!
//! Both operations delegate the capacity-sensitive work to the
//! enrollment repository, which serializes on the course row. Handlers
//! only translate outcomes into HTTP responses.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use smedir_core::enrollment::EnrollmentStatus;
use smedir_core::error::{CoreError, EntityKind};
use smedir_core::types::DbId;
use smedir_db::models::enrollment::CourseEnrollment;
use smedir_db::repositories::{CancelOutcome, EnrollOutcome, EnrollmentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::Identity;
use crate::state::AppState;

/// POST /api/v1/courses/{id}/enrollment
///
/// Sign the caller up for a course. Admission falls to the waitlist when
/// the course is at capacity; a previously cancelled enrollment is
/// re-activated rather than duplicated.
pub async fn enroll(
    identity: Identity,
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<CourseEnrollment>)> {
    let outcome = EnrollmentRepo::enroll(&state.pool, course_id, identity.employee.id).await?;

    match outcome {
        EnrollOutcome::Recorded(enrollment) => Ok((StatusCode::CREATED, Json(enrollment))),
        EnrollOutcome::CourseNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Course,
            id: course_id,
        })),
        EnrollOutcome::NotPublished => Err(AppError::Core(CoreError::Validation(
            "This course is not open for enrollment".into(),
        ))),
        EnrollOutcome::AlreadyActive(row) => {
            let message = match EnrollmentStatus::from_str(&row.status) {
                Ok(EnrollmentStatus::Waitlisted) => {
                    "You are already on the waitlist for this course"
                }
                Ok(EnrollmentStatus::Completed) => "You have already completed this course",
                _ => "You are already enrolled in this course",
            };
            Err(AppError::Core(CoreError::Conflict(message.into())))
        }
    }
}

/// Response body for a cancellation: the cancelled row plus the
/// waitlisted enrollment promoted into the freed slot, if any.
#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub enrollment: CourseEnrollment,
    pub promoted: Option<CourseEnrollment>,
}

/// DELETE /api/v1/courses/{id}/enrollment
///
/// Cancel the caller's enrollment. Freed capacity promotes the oldest
/// waitlisted employee, first come first served.
pub async fn cancel(
    identity: Identity,
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<CancelResponse>> {
    let outcome = EnrollmentRepo::cancel(&state.pool, course_id, identity.employee.id).await?;

    match outcome {
        CancelOutcome::Cancelled {
            enrollment,
            promoted,
        } => Ok(Json(CancelResponse {
            enrollment,
            promoted,
        })),
        CancelOutcome::CourseNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Course,
            id: course_id,
        })),
        CancelOutcome::NoEnrollment => Err(AppError::Core(CoreError::Validation(
            "You are not enrolled in this course".into(),
        ))),
        CancelOutcome::NotCancellable(reason) => Err(AppError::Core(reason)),
    }
}
