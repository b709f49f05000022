//! Handlers for certifications on the caller's own profile.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use smedir_core::error::{CoreError, EntityKind};
use smedir_core::types::DbId;
use smedir_db::models::certification::{Certification, CreateCertification};
use smedir_db::repositories::{CertificationRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::Identity;
use crate::state::AppState;

/// Resolve the caller's profile or reject with 404.
async fn own_profile_id(identity: &Identity, state: &AppState) -> AppResult<DbId> {
    let profile = ProfileRepo::find_by_employee(&state.pool, identity.employee.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: identity.employee.id,
        }))?;
    Ok(profile.id)
}

/// POST /api/v1/certifications
pub async fn create(
    identity: Identity,
    State(state): State<AppState>,
    Json(input): Json<CreateCertification>,
) -> AppResult<(StatusCode, Json<Certification>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Certification name cannot be empty".into(),
        )));
    }

    let profile_id = own_profile_id(&identity, &state).await?;
    let certification = CertificationRepo::create(&state.pool, profile_id, &input).await?;
    Ok((StatusCode::CREATED, Json(certification)))
}

/// GET /api/v1/certifications
pub async fn list_mine(
    identity: Identity,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Certification>>> {
    let profile_id = own_profile_id(&identity, &state).await?;
    let certifications = CertificationRepo::list_for_profile(&state.pool, profile_id).await?;
    Ok(Json(certifications))
}

/// DELETE /api/v1/certifications/{id}
pub async fn delete(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let profile_id = own_profile_id(&identity, &state).await?;
    let deleted = CertificationRepo::delete_owned(&state.pool, id, profile_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Certification,
            id,
        }))
    }
}
