//! Course enrollment status machine and admission rules.
//!
//! The capacity invariant (`enrolled count <= max_capacity`) is upheld by
//! the two write paths in the enrollment repository, both of which decide
//! admission through [`admission`] while holding a row lock on the course.

use serde::Serialize;

use crate::error::CoreError;

pub const ENROLLMENT_ENROLLED: &str = "enrolled";
pub const ENROLLMENT_WAITLISTED: &str = "waitlisted";
pub const ENROLLMENT_CANCELLED: &str = "cancelled";
pub const ENROLLMENT_COMPLETED: &str = "completed";

const VALID_STATUS_STRINGS: &[&str] = &[
    ENROLLMENT_ENROLLED,
    ENROLLMENT_WAITLISTED,
    ENROLLMENT_CANCELLED,
    ENROLLMENT_COMPLETED,
];

/// Status of one (course, employee) enrollment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Enrolled,
    Waitlisted,
    Cancelled,
    Completed,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enrolled => ENROLLMENT_ENROLLED,
            Self::Waitlisted => ENROLLMENT_WAITLISTED,
            Self::Cancelled => ENROLLMENT_CANCELLED,
            Self::Completed => ENROLLMENT_COMPLETED,
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            ENROLLMENT_ENROLLED => Ok(Self::Enrolled),
            ENROLLMENT_WAITLISTED => Ok(Self::Waitlisted),
            ENROLLMENT_CANCELLED => Ok(Self::Cancelled),
            ENROLLMENT_COMPLETED => Ok(Self::Completed),
            _ => Err(CoreError::Validation(format!(
                "Invalid enrollment status '{s}'. Must be one of: {}",
                VALID_STATUS_STRINGS.join(", ")
            ))),
        }
    }
}

/// Decide the status a new sign-up receives.
///
/// `max_capacity = None` means unlimited. At or over capacity the sign-up
/// is waitlisted instead of admitted.
pub fn admission(enrolled_count: i64, max_capacity: Option<i32>) -> EnrollmentStatus {
    match max_capacity {
        Some(capacity) if enrolled_count >= i64::from(capacity) => EnrollmentStatus::Waitlisted,
        _ => EnrollmentStatus::Enrolled,
    }
}

/// Validate that an enrollment in `status` may be cancelled.
///
/// Cancelled rows cannot be re-cancelled and completed sessions are
/// immutable. The messages are distinct per failure cause; the UI relies
/// on that granularity.
pub fn validate_cancellation(status: EnrollmentStatus) -> Result<(), CoreError> {
    match status {
        EnrollmentStatus::Cancelled => Err(CoreError::Validation(
            "This enrollment is already cancelled".to_string(),
        )),
        EnrollmentStatus::Completed => Err(CoreError::Validation(
            "Completed sessions cannot be cancelled".to_string(),
        )),
        EnrollmentStatus::Enrolled | EnrollmentStatus::Waitlisted => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_under_capacity_enrolls() {
        assert_eq!(admission(0, Some(1)), EnrollmentStatus::Enrolled);
        assert_eq!(admission(4, Some(5)), EnrollmentStatus::Enrolled);
    }

    #[test]
    fn test_admission_at_capacity_waitlists() {
        assert_eq!(admission(1, Some(1)), EnrollmentStatus::Waitlisted);
        assert_eq!(admission(6, Some(5)), EnrollmentStatus::Waitlisted);
    }

    #[test]
    fn test_no_capacity_means_unlimited() {
        assert_eq!(admission(10_000, None), EnrollmentStatus::Enrolled);
    }

    #[test]
    fn test_cancelled_cannot_cancel_again() {
        let err = validate_cancellation(EnrollmentStatus::Cancelled).unwrap_err();
        assert!(err.to_string().contains("already cancelled"));
    }

    #[test]
    fn test_completed_is_immutable() {
        let err = validate_cancellation(EnrollmentStatus::Completed).unwrap_err();
        assert!(err.to_string().contains("Completed sessions"));
    }

    #[test]
    fn test_active_enrollments_may_cancel() {
        assert!(validate_cancellation(EnrollmentStatus::Enrolled).is_ok());
        assert!(validate_cancellation(EnrollmentStatus::Waitlisted).is_ok());
    }
}
