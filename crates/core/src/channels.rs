//! Notification type constants.

/// Notification types written to the `notifications` table.
pub const NOTIFICATION_ENDORSEMENT: &str = "endorsement";
pub const NOTIFICATION_NOMINATION: &str = "nomination";
pub const NOTIFICATION_PROFILE_CHANGE: &str = "profile_change";
