//! Domain error taxonomy shared by every crate in the workspace.

use std::fmt;

use crate::types::DbId;

/// The directory entities a lookup can fail to find.
///
/// Keeping these closed means a 404 body always names a real entity kind
/// rather than whatever string a call site improvised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Employee,
    Nomination,
    ExpertProfile,
    ExpertSkill,
    Certification,
    Course,
    Notification,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Nomination => "Nomination",
            Self::ExpertProfile => "ExpertProfile",
            Self::ExpertSkill => "ExpertSkill",
            Self::Certification => "Certification",
            Self::Course => "Course",
            Self::Notification => "Notification",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain rule violation or failed lookup.
///
/// The `Display` output of every variant is user-facing; internal detail
/// belongs in `Internal`, which the API layer sanitizes before responding.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: EntityKind, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_entity() {
        let err = CoreError::NotFound {
            entity: EntityKind::ExpertProfile,
            id: 7,
        };
        assert_eq!(err.to_string(), "ExpertProfile with id 7 not found");
    }

    #[test]
    fn test_validation_display_is_the_message() {
        let err = CoreError::Validation("You cannot nominate yourself".into());
        assert_eq!(err.to_string(), "You cannot nominate yourself");
    }
}
