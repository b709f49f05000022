//! Identity resolution: authenticated session -> employee + role set.
//!
//! Every state-changing operation depends on this single seam instead of
//! re-deriving the caller from the session itself, which also gives tests
//! one place to inject fake identities (mint a token for a seeded
//! employee).

use std::collections::HashSet;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use smedir_core::error::CoreError;
use smedir_core::roles::RoleCode;
use smedir_db::models::employee::Employee;
use smedir_db::repositories::EmployeeRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// The resolved caller: an active employee record plus its role set.
#[derive(Debug, Clone)]
pub struct Identity {
    pub employee: Employee,
    pub roles: HashSet<RoleCode>,
}

impl Identity {
    /// Whether the caller holds the given role.
    pub fn has_role(&self, role: RoleCode) -> bool {
        self.roles.contains(&role)
    }
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let employee = EmployeeRepo::find_active_by_id(&state.pool, auth.employee_id)
            .await?
            .ok_or_else(|| {
                // A valid token for a missing or deactivated employee is a
                // stale session, not a forbidden one.
                AppError::Core(CoreError::Unauthorized(
                    "Unknown or deactivated employee".into(),
                ))
            })?;

        let mut roles = HashSet::new();
        for code in EmployeeRepo::roles_for_employee(&state.pool, employee.id).await? {
            match RoleCode::from_str(&code) {
                Ok(role) => {
                    roles.insert(role);
                }
                Err(_) => {
                    tracing::warn!(employee_id = employee.id, code, "Unknown role code in database");
                }
            }
        }

        Ok(Identity { employee, roles })
    }
}
