//! Skill catalog and per-profile skill models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use smedir_core::types::DbId;

/// An expert skill joined with its catalog name and endorsement count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExpertSkillDetail {
    pub id: DbId,
    pub profile_id: DbId,
    pub skill_id: DbId,
    pub skill_name: String,
    pub proficiency: String,
    pub years_experience: i32,
    pub is_active: bool,
    pub endorsement_count: i64,
}

/// DTO for one skill in a profile create/update payload.
///
/// Catalog rows are lazily created by name.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillInput {
    pub name: String,
    pub proficiency: String,
    #[serde(default)]
    pub years_experience: i32,
}

/// A catalog skill with the number of approved experts carrying it,
/// for the directory skill listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillWithExpertCount {
    pub id: DbId,
    pub name: String,
    pub expert_count: i64,
}
