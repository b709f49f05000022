//! Nomination status machine.
//!
//! A nomination is a team leader's proposal that an employee become an SME.
//! It is created as `submitted`, flips to `approved` implicitly when the
//! nominee completes the profile form, and is forced to `rejected` when a
//! coordinator later deletes the resulting profile. There is no direct
//! `submitted -> rejected` transition.

use serde::Serialize;

use crate::error::CoreError;

pub const NOMINATION_SUBMITTED: &str = "submitted";
pub const NOMINATION_APPROVED: &str = "approved";
pub const NOMINATION_REJECTED: &str = "rejected";

/// Decision note written when a profile deletion forces a rejection.
pub const REJECTION_NOTE_PROFILE_DELETED: &str =
    "Expert profile removed by coordinator; nomination closed.";

const VALID_STATUS_STRINGS: &[&str] = &[
    NOMINATION_SUBMITTED,
    NOMINATION_APPROVED,
    NOMINATION_REJECTED,
];

/// Status of a nomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NominationStatus {
    Submitted,
    Approved,
    Rejected,
}

impl NominationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => NOMINATION_SUBMITTED,
            Self::Approved => NOMINATION_APPROVED,
            Self::Rejected => NOMINATION_REJECTED,
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            NOMINATION_SUBMITTED => Ok(Self::Submitted),
            NOMINATION_APPROVED => Ok(Self::Approved),
            NOMINATION_REJECTED => Ok(Self::Rejected),
            _ => Err(CoreError::Validation(format!(
                "Invalid nomination status '{s}'. Must be one of: {}",
                VALID_STATUS_STRINGS.join(", ")
            ))),
        }
    }

    /// Whether this nomination may transition to `to`.
    ///
    /// `submitted -> approved` happens when the nominee completes their
    /// profile; `approved -> rejected` happens when a coordinator deletes
    /// that profile. Everything else is invalid.
    pub fn can_transition(&self, to: NominationStatus) -> bool {
        matches!(
            (self, to),
            (Self::Submitted, Self::Approved) | (Self::Approved, Self::Rejected)
        )
    }
}

/// Validate a nomination request before any row is written.
///
/// The nominator and nominee must be different employees; role and
/// existence checks happen at the API layer where the caller's identity
/// is known.
pub fn validate_nomination(nominator_id: i64, nominee_id: i64) -> Result<(), CoreError> {
    if nominator_id == nominee_id {
        return Err(CoreError::Validation(
            "You cannot nominate yourself".to_string(),
        ));
    }
    Ok(())
}
