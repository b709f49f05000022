//! Repository for the `endorsements` table.
//!
//! The uniqueness and self-endorsement invariants are checked inside the
//! insert transaction so callers get a clean outcome instead of a raw
//! constraint failure; the `uq_endorsements_skill_endorser` constraint
//! remains as backstop.

use sqlx::PgPool;
use smedir_core::types::DbId;

use crate::models::endorsement::{Endorsement, SkillInstanceOwner};

/// Column list for `endorsements` queries.
const COLUMNS: &str = "id, expert_skill_id, endorser_id, comment, created_at";

/// Outcome of an endorsement attempt.
#[derive(Debug)]
pub enum EndorseOutcome {
    /// The endorsement was recorded, with the context needed to notify
    /// the skill owner.
    Created {
        endorsement: Endorsement,
        owner: SkillInstanceOwner,
    },
    /// The referenced skill instance does not exist.
    SkillNotFound,
    /// The endorser owns the skill.
    SelfEndorsement,
    /// This endorser already endorsed this skill instance.
    Duplicate,
}

/// Provides the endorsement ledger operations.
pub struct EndorsementRepo;

impl EndorsementRepo {
    /// Resolve a skill instance to its profile and owning employee.
    pub async fn find_skill_instance_owner(
        pool: &PgPool,
        expert_skill_id: DbId,
    ) -> Result<Option<SkillInstanceOwner>, sqlx::Error> {
        sqlx::query_as::<_, SkillInstanceOwner>(
            "SELECT es.id AS expert_skill_id, es.profile_id, \
                    p.employee_id AS owner_employee_id, s.name AS skill_name \
             FROM expert_skills es \
             JOIN expert_profiles p ON p.id = es.profile_id \
             JOIN skills s ON s.id = es.skill_id \
             WHERE es.id = $1",
        )
        .bind(expert_skill_id)
        .fetch_optional(pool)
        .await
    }

    /// Record one employee's endorsement of one skill instance.
    pub async fn endorse(
        pool: &PgPool,
        expert_skill_id: DbId,
        endorser_id: DbId,
        comment: Option<&str>,
    ) -> Result<EndorseOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let owner = sqlx::query_as::<_, SkillInstanceOwner>(
            "SELECT es.id AS expert_skill_id, es.profile_id, \
                    p.employee_id AS owner_employee_id, s.name AS skill_name \
             FROM expert_skills es \
             JOIN expert_profiles p ON p.id = es.profile_id \
             JOIN skills s ON s.id = es.skill_id \
             WHERE es.id = $1 \
             FOR UPDATE OF es",
        )
        .bind(expert_skill_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(owner) = owner else {
            return Ok(EndorseOutcome::SkillNotFound);
        };

        if owner.owner_employee_id == endorser_id {
            return Ok(EndorseOutcome::SelfEndorsement);
        }

        let duplicate: Option<DbId> = sqlx::query_scalar(
            "SELECT id FROM endorsements WHERE expert_skill_id = $1 AND endorser_id = $2",
        )
        .bind(expert_skill_id)
        .bind(endorser_id)
        .fetch_optional(&mut *tx)
        .await?;
        if duplicate.is_some() {
            return Ok(EndorseOutcome::Duplicate);
        }

        let insert_query = format!(
            "INSERT INTO endorsements (expert_skill_id, endorser_id, comment) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let endorsement = sqlx::query_as::<_, Endorsement>(&insert_query)
            .bind(expert_skill_id)
            .bind(endorser_id)
            .bind(comment)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(EndorseOutcome::Created { endorsement, owner })
    }

    /// Skill-instance ids on `profile_id` that `endorser_id` already
    /// endorsed. Drives idempotent UI state (hide the endorse button).
    pub async fn endorsed_skill_ids(
        pool: &PgPool,
        endorser_id: DbId,
        profile_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT e.expert_skill_id FROM endorsements e \
             JOIN expert_skills es ON es.id = e.expert_skill_id \
             WHERE e.endorser_id = $1 AND es.profile_id = $2 \
             ORDER BY e.expert_skill_id",
        )
        .bind(endorser_id)
        .bind(profile_id)
        .fetch_all(pool)
        .await
    }

    /// Number of endorsements recorded for a skill instance.
    pub async fn count_for_skill(
        pool: &PgPool,
        expert_skill_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM endorsements WHERE expert_skill_id = $1")
                .bind(expert_skill_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }
}
