//! Handlers for the `/courses` resource.
//!
//! Courses are offered by approved experts only; listing and detail views
//! carry the caller's own enrollment status so the UI can render the
//! right button without a second round trip.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use smedir_core::course::{validate_capacity, validate_schedule, validate_title, DeliveryMode};
use smedir_core::error::{CoreError, EntityKind};
use smedir_core::profile::ProfileStatus;
use smedir_core::types::DbId;
use smedir_db::models::course::{Course, CourseWithEnrollment, CreateCourse};
use smedir_db::models::profile::ExpertProfile;
use smedir_db::repositories::{CourseRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::Identity;
use crate::state::AppState;

/// Resolve the caller's profile and require it to be `approved`.
async fn approved_profile(identity: &Identity, state: &AppState) -> AppResult<ExpertProfile> {
    let profile = ProfileRepo::find_by_employee(&state.pool, identity.employee.id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "Only approved experts can offer courses".into(),
            ))
        })?;

    if ProfileStatus::from_str(&profile.status)? != ProfileStatus::Approved {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only approved experts can offer courses".into(),
        )));
    }

    Ok(profile)
}

/// POST /api/v1/courses
pub async fn create(
    identity: Identity,
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    validate_title(&input.title)?;
    DeliveryMode::from_str(&input.delivery_mode)?;
    validate_capacity(input.max_capacity)?;
    validate_schedule(input.scheduled_at, Utc::now())?;

    let profile = approved_profile(&identity, &state).await?;
    let course = CourseRepo::create(&state.pool, profile.id, &input).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses
///
/// Published courses, soonest-scheduled first, each annotated with the
/// enrolled count and the caller's own enrollment status.
pub async fn list(
    identity: Identity,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CourseWithEnrollment>>> {
    let courses = CourseRepo::list_published(&state.pool).await?;

    let mut enriched = Vec::with_capacity(courses.len());
    for course in courses {
        enriched.push(CourseRepo::with_enrollment(&state.pool, course, identity.employee.id).await?);
    }
    Ok(Json(enriched))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CourseWithEnrollment>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Course,
            id,
        }))?;

    let enriched = CourseRepo::with_enrollment(&state.pool, course, identity.employee.id).await?;
    Ok(Json(enriched))
}

/// DELETE /api/v1/courses/{id}
///
/// Owner-only removal. Enrollments go with the course via cascade.
pub async fn delete(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Course,
            id,
        }))?;

    let profile = ProfileRepo::find_by_employee(&state.pool, identity.employee.id).await?;
    let owns = profile.map(|p| p.id == course.profile_id).unwrap_or(false);
    if !owns {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the course owner can delete it".into(),
        )));
    }

    let deleted = CourseRepo::delete_owned(&state.pool, course.id, course.profile_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Course,
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
