//! Handlers for the `/nominations` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use smedir_core::error::{CoreError, EntityKind};
use smedir_core::nomination::{validate_nomination, NominationStatus};
use smedir_core::types::DbId;
use smedir_db::models::nomination::Nomination;
use smedir_db::repositories::{EmployeeRepo, NominationRepo, ProfileRepo};
use smedir_events::DirectoryEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireCoordinator, RequireTeamLeader};
use crate::state::AppState;

/// Request body for submitting a nomination.
#[derive(Debug, Deserialize)]
pub struct NominateRequest {
    pub nominee_id: DbId,
}

/// POST /api/v1/nominations
///
/// Team leaders propose an employee as an SME. At most one `submitted`
/// nomination may exist per nominee, and nominees who already hold a
/// profile cannot be re-nominated.
pub async fn create(
    RequireTeamLeader(identity): RequireTeamLeader,
    State(state): State<AppState>,
    Json(input): Json<NominateRequest>,
) -> AppResult<(StatusCode, Json<Nomination>)> {
    validate_nomination(identity.employee.id, input.nominee_id)?;

    let nominee = EmployeeRepo::find_active_by_id(&state.pool, input.nominee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Employee,
            id: input.nominee_id,
        }))?;

    if ProfileRepo::find_by_employee(&state.pool, nominee.id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "This employee already has an expert profile".into(),
        )));
    }

    if NominationRepo::find_submitted_for_nominee(&state.pool, nominee.id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "This employee already has a pending nomination".into(),
        )));
    }

    let department_name = EmployeeRepo::department_name(&state.pool, nominee.id).await?;
    let nomination = NominationRepo::create(
        &state.pool,
        nominee.id,
        identity.employee.id,
        department_name.as_deref(),
    )
    .await?;

    state.event_bus.publish(DirectoryEvent::NominationSubmitted {
        nominee_id: nominee.id,
        nominator_name: identity.employee.display_name(),
        nomination_id: nomination.id,
    });

    Ok((StatusCode::CREATED, Json(nomination)))
}

/// Query parameters for the nomination listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// GET /api/v1/nominations?status=submitted
///
/// Coordinator view of the nomination ledger, newest first.
pub async fn list(
    RequireCoordinator(_identity): RequireCoordinator,
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<Vec<Nomination>>> {
    let status = match &params.status {
        Some(raw) => Some(NominationStatus::from_str(raw)?),
        None => None,
    };

    let nominations =
        NominationRepo::list(&state.pool, status.map(|s| s.as_str())).await?;
    Ok(Json(nominations))
}
