//! Weekly availability structure and validation.
//!
//! Availability is stored as JSONB on the profile row: an object with one
//! entry per weekday, each carrying an enabled flag and an `HH:MM` time
//! window. The API validates the payload here before it is persisted.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Weekday keys, in storage order.
pub const WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Availability window for a single weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub enabled: bool,
    /// Window start, `HH:MM` 24-hour format.
    pub start: String,
    /// Window end, `HH:MM` 24-hour format.
    pub end: String,
}

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap())
}

/// Validate one `HH:MM` time string.
pub fn validate_time(value: &str) -> Result<(), CoreError> {
    if !time_regex().is_match(value) {
        return Err(CoreError::Validation(format!(
            "Invalid time '{value}'. Must be HH:MM in 24-hour format"
        )));
    }
    Ok(())
}

/// Validate a weekly availability JSON payload.
///
/// The payload must be an object whose keys are all weekday names; each
/// entry must deserialize to [`DayAvailability`] with a well-formed window
/// where start precedes end. Unknown keys are rejected so typos do not
/// silently drop a day.
pub fn validate_availability(json: &serde_json::Value) -> Result<(), CoreError> {
    let obj = json
        .as_object()
        .ok_or_else(|| CoreError::Validation("availability must be a JSON object".to_string()))?;

    for key in obj.keys() {
        if !WEEKDAYS.contains(&key.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown availability day '{key}'. Must be one of: {}",
                WEEKDAYS.join(", ")
            )));
        }
    }

    for day in WEEKDAYS {
        let Some(value) = obj.get(*day) else {
            continue;
        };
        let entry: DayAvailability = serde_json::from_value(value.clone()).map_err(|e| {
            CoreError::Validation(format!("Invalid availability entry for '{day}': {e}"))
        })?;
        if !entry.enabled {
            continue;
        }
        validate_time(&entry.start)?;
        validate_time(&entry.end)?;
        // HH:MM strings compare correctly lexicographically.
        if entry.start >= entry.end {
            return Err(CoreError::Validation(format!(
                "Availability window for '{day}' must start before it ends"
            )));
        }
    }

    Ok(())
}

/// Validate an optional contact phone number.
///
/// Accepts digits, spaces, dashes, parentheses, and a leading `+`, between
/// 7 and 20 characters.
pub fn validate_phone(value: &str) -> Result<(), CoreError> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^\+?[\d\s\-()]{7,20}$").unwrap());
    if !re.is_match(value) {
        return Err(CoreError::Validation(format!(
            "Invalid contact phone '{value}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_week_accepted() {
        let availability = json!({
            "monday": { "enabled": true, "start": "09:00", "end": "17:00" },
            "friday": { "enabled": false, "start": "00:00", "end": "00:00" },
        });
        assert!(validate_availability(&availability).is_ok());
    }

    #[test]
    fn test_unknown_day_rejected() {
        let availability = json!({
            "funday": { "enabled": true, "start": "09:00", "end": "17:00" },
        });
        assert!(validate_availability(&availability).is_err());
    }

    #[test]
    fn test_inverted_window_rejected() {
        let availability = json!({
            "tuesday": { "enabled": true, "start": "17:00", "end": "09:00" },
        });
        let err = validate_availability(&availability).unwrap_err();
        assert!(err.to_string().contains("start before it ends"));
    }

    #[test]
    fn test_disabled_day_skips_window_check() {
        let availability = json!({
            "tuesday": { "enabled": false, "start": "", "end": "" },
        });
        assert!(validate_availability(&availability).is_ok());
    }

    #[test]
    fn test_malformed_time_rejected() {
        assert!(validate_time("9:00").is_err());
        assert!(validate_time("25:00").is_err());
        assert!(validate_time("12:60").is_err());
        assert!(validate_time("12:30").is_ok());
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_non_object_availability_rejected() {
        assert!(validate_availability(&json!([1, 2, 3])).is_err());
    }
}
