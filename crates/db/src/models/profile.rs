//! Expert profile entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use smedir_core::types::{DbId, Timestamp};

use crate::models::skill::{ExpertSkillDetail, SkillInput};

/// A row from the `expert_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExpertProfile {
    pub id: DbId,
    pub employee_id: DbId,
    pub bio: Option<String>,
    pub availability: serde_json::Value,
    pub contact_phone: Option<String>,
    pub contact_preference: Option<String>,
    pub meeting_link: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One approved expert in a directory listing, before skills are attached.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExpertSummaryRow {
    pub profile_id: DbId,
    pub employee_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub department_name: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
}

/// A directory entry: an approved expert with their skills.
#[derive(Debug, Serialize)]
pub struct ExpertSummary {
    #[serde(flatten)]
    pub expert: ExpertSummaryRow,
    pub skills: Vec<ExpertSkillDetail>,
}

/// DTO for profile creation.
#[derive(Debug, Deserialize)]
pub struct CreateProfile {
    pub bio: Option<String>,
    pub availability: Option<serde_json::Value>,
    pub contact_phone: Option<String>,
    pub contact_preference: Option<String>,
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillInput>,
}

/// DTO for partial profile update.
///
/// Absent fields are left untouched ("undefined means no change"); a
/// supplied `skills` list replaces the full skill set.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub bio: Option<String>,
    pub availability: Option<serde_json::Value>,
    pub contact_phone: Option<String>,
    pub contact_preference: Option<String>,
    pub meeting_link: Option<String>,
    pub skills: Option<Vec<SkillInput>>,
}
