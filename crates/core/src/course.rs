//! Course delivery modes and input validation.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

const VALID_MODE_STRINGS: &[&str] = &["virtual", "in_person", "hybrid"];

/// How a training course is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    Virtual,
    InPerson,
    Hybrid,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Virtual => "virtual",
            Self::InPerson => "in_person",
            Self::Hybrid => "hybrid",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "virtual" => Ok(Self::Virtual),
            "in_person" => Ok(Self::InPerson),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(CoreError::Validation(format!(
                "Invalid delivery mode '{s}'. Must be one of: {}",
                VALID_MODE_STRINGS.join(", ")
            ))),
        }
    }
}

/// Validate a course title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Course title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate an optional max capacity. `None` means unlimited.
pub fn validate_capacity(max_capacity: Option<i32>) -> Result<(), CoreError> {
    if let Some(capacity) = max_capacity {
        if capacity <= 0 {
            return Err(CoreError::Validation(format!(
                "Max capacity must be positive, got {capacity}"
            )));
        }
    }
    Ok(())
}

/// Validate an optional scheduled date against the current time.
///
/// Past-dated schedules are rejected at creation.
pub fn validate_schedule(scheduled_at: Option<Timestamp>, now: Timestamp) -> Result<(), CoreError> {
    if let Some(when) = scheduled_at {
        if when < now {
            return Err(CoreError::Validation(
                "Course schedule must not be in the past".to_string(),
            ));
        }
    }
    Ok(())
}
