//! Handlers for skill endorsements.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use smedir_core::error::{CoreError, EntityKind};
use smedir_core::types::DbId;
use smedir_db::models::endorsement::Endorsement;
use smedir_db::repositories::{EndorseOutcome, EndorsementRepo};
use smedir_events::DirectoryEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::Identity;
use crate::state::AppState;

/// Request body for endorsing a skill. The comment is optional.
#[derive(Debug, Deserialize)]
pub struct EndorseRequest {
    pub comment: Option<String>,
}

/// POST /api/v1/skills/{expert_skill_id}/endorsements
///
/// Record the caller's endorsement of one skill instance. One per
/// (skill instance, endorser) pair, and never on your own profile.
pub async fn create(
    identity: Identity,
    State(state): State<AppState>,
    Path(expert_skill_id): Path<DbId>,
    Json(input): Json<EndorseRequest>,
) -> AppResult<(StatusCode, Json<Endorsement>)> {
    let comment = input
        .comment
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let outcome = EndorsementRepo::endorse(
        &state.pool,
        expert_skill_id,
        identity.employee.id,
        comment,
    )
    .await?;

    let (endorsement, owner) = match outcome {
        EndorseOutcome::Created { endorsement, owner } => (endorsement, owner),
        EndorseOutcome::SkillNotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: EntityKind::ExpertSkill,
                id: expert_skill_id,
            }));
        }
        EndorseOutcome::SelfEndorsement => {
            return Err(AppError::Core(CoreError::Validation(
                "You cannot endorse your own skills".into(),
            )));
        }
        EndorseOutcome::Duplicate => {
            return Err(AppError::Core(CoreError::Conflict(
                "You have already endorsed this skill".into(),
            )));
        }
    };

    state.event_bus.publish(DirectoryEvent::EndorsementCreated {
        sme_employee_id: owner.owner_employee_id,
        endorser_name: identity.employee.display_name(),
        endorser_position: identity.employee.position.clone(),
        skill_name: owner.skill_name,
        endorsement_id: endorsement.id,
        comment: endorsement.comment.clone(),
    });

    Ok((StatusCode::CREATED, Json(endorsement)))
}
