//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`Identity`] and rejects requests whose role set
//! does not meet the minimum requirement. Use these in route handlers to
//! enforce authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use smedir_core::error::CoreError;
use smedir_core::roles::RoleCode;

use super::identity::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `team_leader` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn leaders_only(RequireTeamLeader(identity): RequireTeamLeader) -> AppResult<Json<()>> {
///     // identity is guaranteed to hold the team_leader role here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireTeamLeader(pub Identity);

impl FromRequestParts<AppState> for RequireTeamLeader {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = Identity::from_request_parts(parts, state).await?;
        if !identity.has_role(RoleCode::TeamLeader) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only team leaders can nominate experts".into(),
            )));
        }
        Ok(RequireTeamLeader(identity))
    }
}

/// Requires the `coordinator` role. Rejects with 403 Forbidden otherwise.
///
/// Department-scoped authority is checked separately per target; this
/// extractor only establishes the role.
pub struct RequireCoordinator(pub Identity);

impl FromRequestParts<AppState> for RequireCoordinator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = Identity::from_request_parts(parts, state).await?;
        if !identity.has_role(RoleCode::Coordinator) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Coordinator role required".into(),
            )));
        }
        Ok(RequireCoordinator(identity))
    }
}
