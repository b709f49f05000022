//! Expert profile status machine and profile field enums.

use serde::Serialize;

use crate::error::CoreError;

pub const PROFILE_APPROVED: &str = "approved";
pub const PROFILE_SUSPENDED: &str = "suspended";
pub const PROFILE_INACTIVE: &str = "inactive";

const VALID_STATUS_STRINGS: &[&str] = &[PROFILE_APPROVED, PROFILE_SUSPENDED, PROFILE_INACTIVE];

/// Status of an expert profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Approved,
    Suspended,
    Inactive,
}

impl ProfileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => PROFILE_APPROVED,
            Self::Suspended => PROFILE_SUSPENDED,
            Self::Inactive => PROFILE_INACTIVE,
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            PROFILE_APPROVED => Ok(Self::Approved),
            PROFILE_SUSPENDED => Ok(Self::Suspended),
            PROFILE_INACTIVE => Ok(Self::Inactive),
            _ => Err(CoreError::Validation(format!(
                "Invalid profile status '{s}'. Must be one of: {}",
                VALID_STATUS_STRINGS.join(", ")
            ))),
        }
    }

    /// The status after the owner's self-toggle.
    ///
    /// A pure bit-flip between `approved` and `inactive`. A `suspended`
    /// profile also toggles to `approved`, which overrides a coordinator
    /// suspension; this matches the long-observed behavior and is kept
    /// deliberately (see DESIGN.md).
    pub fn toggled(&self) -> ProfileStatus {
        match self {
            Self::Approved => Self::Inactive,
            Self::Suspended | Self::Inactive => Self::Approved,
        }
    }
}

/// Validate the status a coordinator may set on a profile.
///
/// Coordinators may only set `approved` or `suspended`; `inactive` is
/// reserved for the owner's self-toggle.
pub fn validate_coordinator_status(status: &str) -> Result<ProfileStatus, CoreError> {
    match ProfileStatus::from_str(status)? {
        ProfileStatus::Inactive => Err(CoreError::Validation(format!(
            "Coordinators may only set status to '{PROFILE_APPROVED}' or '{PROFILE_SUSPENDED}'"
        ))),
        other => Ok(other),
    }
}

// ---------------------------------------------------------------------------
// Skill proficiency
// ---------------------------------------------------------------------------

const VALID_PROFICIENCY_STRINGS: &[&str] = &["beginner", "intermediate", "advanced", "expert"];

/// Self-assessed proficiency for one skill on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            _ => Err(CoreError::Validation(format!(
                "Invalid proficiency '{s}'. Must be one of: {}",
                VALID_PROFICIENCY_STRINGS.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Contact preference
// ---------------------------------------------------------------------------

const VALID_CONTACT_STRINGS: &[&str] = &["email", "phone", "meeting"];

/// How an SME prefers to be contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPreference {
    Email,
    Phone,
    Meeting,
}

impl ContactPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Meeting => "meeting",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "meeting" => Ok(Self::Meeting),
            _ => Err(CoreError::Validation(format!(
                "Invalid contact preference '{s}'. Must be one of: {}",
                VALID_CONTACT_STRINGS.join(", ")
            ))),
        }
    }
}
