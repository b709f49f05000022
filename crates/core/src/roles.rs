//! Role codes and well-known role name constants.
//!
//! The string constants must match the seed data in
//! `20260301000001_create_employees.sql`.

use serde::Serialize;

use crate::error::CoreError;

pub const ROLE_EMPLOYEE: &str = "employee";
pub const ROLE_TEAM_LEADER: &str = "team_leader";
pub const ROLE_COORDINATOR: &str = "coordinator";
pub const ROLE_MANAGEMENT: &str = "management";

/// All valid role code strings.
const VALID_ROLE_STRINGS: &[&str] = &[
    ROLE_EMPLOYEE,
    ROLE_TEAM_LEADER,
    ROLE_COORDINATOR,
    ROLE_MANAGEMENT,
];

/// A role assigned to an employee. Drives every authorization branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCode {
    Employee,
    TeamLeader,
    Coordinator,
    Management,
}

impl RoleCode {
    /// Return the role code as the seeded database string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => ROLE_EMPLOYEE,
            Self::TeamLeader => ROLE_TEAM_LEADER,
            Self::Coordinator => ROLE_COORDINATOR,
            Self::Management => ROLE_MANAGEMENT,
        }
    }

    /// Parse a role code from its database string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            ROLE_EMPLOYEE => Ok(Self::Employee),
            ROLE_TEAM_LEADER => Ok(Self::TeamLeader),
            ROLE_COORDINATOR => Ok(Self::Coordinator),
            ROLE_MANAGEMENT => Ok(Self::Management),
            _ => Err(CoreError::Validation(format!(
                "Invalid role code '{s}'. Must be one of: {}",
                VALID_ROLE_STRINGS.join(", ")
            ))),
        }
    }
}
