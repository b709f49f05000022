//! Endorsement entity model.

use serde::Serialize;
use sqlx::FromRow;
use smedir_core::types::{DbId, Timestamp};

/// A row from the `endorsements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Endorsement {
    pub id: DbId,
    pub expert_skill_id: DbId,
    pub endorser_id: DbId,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// A skill instance joined with its owner, used for endorsement checks.
#[derive(Debug, Clone, FromRow)]
pub struct SkillInstanceOwner {
    pub expert_skill_id: DbId,
    pub profile_id: DbId,
    pub owner_employee_id: DbId,
    pub skill_name: String,
}
