//! Handlers for the notification inbox and preferences.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use smedir_core::error::{CoreError, EntityKind};
use smedir_core::types::DbId;
use smedir_db::models::notification::{Notification, NotificationPreference, UpdatePreferences};
use smedir_db::repositories::{NotificationPreferenceRepo, NotificationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::Identity;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the inbox listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

/// GET /api/v1/notifications
pub async fn list(
    identity: Identity,
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let notifications = NotificationRepo::list_for_employee(
        &state.pool,
        identity.employee.id,
        params.unread_only,
        limit,
        offset,
    )
    .await?;
    Ok(Json(notifications))
}

/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    identity: Identity,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<i64>>> {
    let count = NotificationRepo::unread_count(&state.pool, identity.employee.id).await?;
    Ok(Json(DataResponse { data: count }))
}

/// PUT /api/v1/notifications/{id}/read
pub async fn mark_read(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let updated = NotificationRepo::mark_read(&state.pool, id, identity.employee.id).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Notification,
            id,
        }))
    }
}

/// PUT /api/v1/notifications/read-all
pub async fn mark_all_read(
    identity: Identity,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<u64>>> {
    let updated = NotificationRepo::mark_all_read(&state.pool, identity.employee.id).await?;
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/notifications/{id}
pub async fn delete(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NotificationRepo::delete_owned(&state.pool, id, identity.employee.id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Notification,
            id,
        }))
    }
}

/// GET /api/v1/notifications/preferences
///
/// Preferences default to all-enabled and are created lazily on first
/// read.
pub async fn get_preferences(
    identity: Identity,
    State(state): State<AppState>,
) -> AppResult<Json<NotificationPreference>> {
    let prefs =
        NotificationPreferenceRepo::get_or_create(&state.pool, identity.employee.id).await?;
    Ok(Json(prefs))
}

/// PUT /api/v1/notifications/preferences
pub async fn update_preferences(
    identity: Identity,
    State(state): State<AppState>,
    Json(input): Json<UpdatePreferences>,
) -> AppResult<Json<NotificationPreference>> {
    let prefs =
        NotificationPreferenceRepo::update(&state.pool, identity.employee.id, &input).await?;
    Ok(Json(prefs))
}
