//! Handlers for the `/profiles` resource.
//!
//! Profile creation doubles as the nomination approval step: completing
//! the form flips the gating nomination to `approved` and notifies the
//! nominating team leader.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use smedir_core::availability::{validate_availability, validate_phone};
use smedir_core::error::{CoreError, EntityKind};
use smedir_core::profile::{
    validate_coordinator_status, ContactPreference, ProfileStatus, Proficiency,
};
use smedir_core::types::DbId;
use smedir_db::models::certification::Certification;
use smedir_db::models::profile::{CreateProfile, ExpertProfile, UpdateProfile};
use smedir_db::models::skill::{ExpertSkillDetail, SkillInput};
use smedir_db::repositories::{
    CertificationRepo, CreateProfileOutcome, DepartmentRepo, EndorsementRepo, ProfileRepo,
    SkillRepo,
};
use smedir_events::DirectoryEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::Identity;
use crate::middleware::rbac::RequireCoordinator;
use crate::state::AppState;

/// A profile with everything the profile page renders.
#[derive(Debug, Serialize)]
pub struct ProfileDetail {
    #[serde(flatten)]
    pub profile: ExpertProfile,
    pub skills: Vec<ExpertSkillDetail>,
    pub certifications: Vec<Certification>,
}

/// Validate the free-form profile fields shared by create and update.
fn validate_profile_fields(
    availability: Option<&serde_json::Value>,
    contact_phone: Option<&str>,
    contact_preference: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(availability) = availability {
        validate_availability(availability)?;
    }
    if let Some(phone) = contact_phone {
        validate_phone(phone)?;
    }
    if let Some(preference) = contact_preference {
        ContactPreference::from_str(preference)?;
    }
    Ok(())
}

/// Validate a skill list from a create or update payload.
fn validate_skills(skills: &[SkillInput]) -> Result<(), CoreError> {
    for skill in skills {
        if skill.name.trim().is_empty() {
            return Err(CoreError::Validation("Skill name cannot be empty".into()));
        }
        Proficiency::from_str(&skill.proficiency)?;
        if skill.years_experience < 0 {
            return Err(CoreError::Validation(
                "Years of experience cannot be negative".into(),
            ));
        }
    }
    Ok(())
}

async fn load_detail(state: &AppState, profile: ExpertProfile) -> AppResult<ProfileDetail> {
    let skills = SkillRepo::list_for_profile(&state.pool, profile.id).await?;
    let certifications = CertificationRepo::list_for_profile(&state.pool, profile.id).await?;
    Ok(ProfileDetail {
        profile,
        skills,
        certifications,
    })
}

/// POST /api/v1/profiles
///
/// Create the caller's own profile. Gated by a `submitted` nomination;
/// the profile is born `approved` and the nomination flips with it.
pub async fn create(
    identity: Identity,
    State(state): State<AppState>,
    Json(input): Json<CreateProfile>,
) -> AppResult<(StatusCode, Json<ProfileDetail>)> {
    validate_profile_fields(
        input.availability.as_ref(),
        input.contact_phone.as_deref(),
        input.contact_preference.as_deref(),
    )?;
    validate_skills(&input.skills)?;

    let outcome =
        ProfileRepo::create_with_skills(&state.pool, identity.employee.id, &input).await?;

    let (profile, approved_nominations) = match outcome {
        CreateProfileOutcome::Created {
            profile,
            approved_nominations,
        } => (profile, approved_nominations),
        CreateProfileOutcome::ProfileExists => {
            return Err(AppError::Core(CoreError::Conflict(
                "You already have an expert profile".into(),
            )));
        }
        CreateProfileOutcome::NoSubmittedNomination => {
            return Err(AppError::Core(CoreError::Forbidden(
                "You must be nominated before creating an expert profile".into(),
            )));
        }
    };

    for nomination in &approved_nominations {
        state.event_bus.publish(DirectoryEvent::NominationApproved {
            nominator_id: nomination.nominator_id,
            nominee_name: identity.employee.display_name(),
            nomination_id: nomination.id,
        });
    }

    let detail = load_detail(&state, profile).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/v1/profiles/me
pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> AppResult<Json<ProfileDetail>> {
    let profile = ProfileRepo::find_by_employee(&state.pool, identity.employee.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: identity.employee.id,
        }))?;
    let detail = load_detail(&state, profile).await?;
    Ok(Json(detail))
}

/// GET /api/v1/profiles/{employee_id}
pub async fn get_by_employee(
    _identity: Identity,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<Json<ProfileDetail>> {
    let profile = ProfileRepo::find_by_employee(&state.pool, employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: employee_id,
        }))?;
    let detail = load_detail(&state, profile).await?;
    Ok(Json(detail))
}

/// PUT /api/v1/profiles/me
///
/// Partial update of the caller's own profile. Absent fields are left
/// untouched; a supplied skill list replaces the full set.
pub async fn update_me(
    identity: Identity,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<ProfileDetail>> {
    validate_profile_fields(
        input.availability.as_ref(),
        input.contact_phone.as_deref(),
        input.contact_preference.as_deref(),
    )?;
    if let Some(skills) = &input.skills {
        validate_skills(skills)?;
    }

    let profile = ProfileRepo::find_by_employee(&state.pool, identity.employee.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: identity.employee.id,
        }))?;

    let updated = ProfileRepo::update(&state.pool, profile.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: profile.id,
        }))?;

    let detail = load_detail(&state, updated).await?;
    Ok(Json(detail))
}

/// POST /api/v1/profiles/me/status-toggle
///
/// The owner's availability switch. Flips `approved` to `inactive` and
/// anything else back to `approved`.
pub async fn toggle_my_status(
    identity: Identity,
    State(state): State<AppState>,
) -> AppResult<Json<ExpertProfile>> {
    let profile = ProfileRepo::find_by_employee(&state.pool, identity.employee.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: identity.employee.id,
        }))?;

    let next = ProfileStatus::from_str(&profile.status)?.toggled();
    let updated = ProfileRepo::set_status(&state.pool, profile.id, next)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: profile.id,
        }))?;

    Ok(Json(updated))
}

/// Request body for a coordinator status change.
#[derive(Debug, serde::Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// PUT /api/v1/profiles/{employee_id}/status
///
/// Coordinator suspend/reinstate. Scoped to the coordinator's managed
/// departments; notifies the profile owner.
pub async fn set_status(
    RequireCoordinator(identity): RequireCoordinator,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<ExpertProfile>> {
    let status = validate_coordinator_status(&input.status)?;

    let profile = ProfileRepo::find_by_employee(&state.pool, employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: employee_id,
        }))?;

    let manages =
        DepartmentRepo::coordinator_manages_employee(&state.pool, identity.employee.id, employee_id)
            .await?;
    if !manages {
        return Err(AppError::Core(CoreError::Forbidden(
            "You don't have access to this SME's department".into(),
        )));
    }

    let updated = ProfileRepo::set_status(&state.pool, profile.id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: profile.id,
        }))?;

    state.event_bus.publish(DirectoryEvent::ProfileStatusChanged {
        owner_employee_id: employee_id,
        profile_id: updated.id,
        status: updated.status.clone(),
    });

    Ok(Json(updated))
}

/// DELETE /api/v1/profiles/{employee_id}
///
/// Coordinator removal of a profile and everything hanging off it.
/// Forces the owner's approved nomination back to `rejected`, so they
/// must be re-nominated to return.
pub async fn delete(
    RequireCoordinator(identity): RequireCoordinator,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let profile = ProfileRepo::find_by_employee(&state.pool, employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: employee_id,
        }))?;

    let manages =
        DepartmentRepo::coordinator_manages_employee(&state.pool, identity.employee.id, employee_id)
            .await?;
    if !manages {
        return Err(AppError::Core(CoreError::Forbidden(
            "You don't have access to this SME's department".into(),
        )));
    }

    let deleted = ProfileRepo::delete_cascading(&state.pool, profile.id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: profile.id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/profiles/{profile_id}/endorsed-skills
///
/// The skill-instance ids on this profile that the caller has already
/// endorsed. Drives the endorse-button state in the UI.
pub async fn endorsed_skills(
    identity: Identity,
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
) -> AppResult<Json<Vec<DbId>>> {
    if ProfileRepo::find_by_id(&state.pool, profile_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: profile_id,
        }));
    }

    let ids =
        EndorsementRepo::endorsed_skill_ids(&state.pool, identity.employee.id, profile_id).await?;
    Ok(Json(ids))
}
