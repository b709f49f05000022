//! Repository for the `skills` catalog and `expert_skills` join table.

use sqlx::{PgPool, Postgres, Transaction};
use smedir_core::types::DbId;

use crate::models::skill::{ExpertSkillDetail, SkillInput, SkillWithExpertCount};

/// Column list for joined `expert_skills` detail queries.
const DETAIL_COLUMNS: &str = "es.id, es.profile_id, es.skill_id, s.name AS skill_name, \
    es.proficiency, es.years_experience, es.is_active, \
    (SELECT COUNT(*) FROM endorsements e WHERE e.expert_skill_id = es.id) AS endorsement_count";

/// Provides catalog lookups and per-profile skill management.
pub struct SkillRepo;

impl SkillRepo {
    /// Find a catalog skill by name, creating it when missing.
    ///
    /// Runs inside the caller's transaction; the upsert keeps concurrent
    /// profile submissions from racing on the same new skill name.
    pub async fn find_or_create(
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO skills (name) VALUES ($1) \
             ON CONFLICT ON CONSTRAINT uq_skills_name \
             DO UPDATE SET name = EXCLUDED.name \
             RETURNING id",
        )
        .bind(name.trim())
        .fetch_one(&mut **tx)
        .await
    }

    /// Insert one expert skill row for a profile.
    pub async fn insert_expert_skill(
        tx: &mut Transaction<'_, Postgres>,
        profile_id: DbId,
        input: &SkillInput,
    ) -> Result<DbId, sqlx::Error> {
        let skill_id = Self::find_or_create(tx, &input.name).await?;
        sqlx::query_scalar(
            "INSERT INTO expert_skills (profile_id, skill_id, proficiency, years_experience) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(profile_id)
        .bind(skill_id)
        .bind(&input.proficiency)
        .bind(input.years_experience)
        .fetch_one(&mut **tx)
        .await
    }

    /// Replace the full skill set of a profile (delete-then-reinsert).
    pub async fn replace_for_profile(
        tx: &mut Transaction<'_, Postgres>,
        profile_id: DbId,
        skills: &[SkillInput],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM expert_skills WHERE profile_id = $1")
            .bind(profile_id)
            .execute(&mut **tx)
            .await?;
        for input in skills {
            Self::insert_expert_skill(tx, profile_id, input).await?;
        }
        Ok(())
    }

    /// List a profile's skills with catalog names and endorsement counts.
    pub async fn list_for_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<ExpertSkillDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM expert_skills es \
             JOIN skills s ON s.id = es.skill_id \
             WHERE es.profile_id = $1 \
             ORDER BY s.name"
        );
        sqlx::query_as::<_, ExpertSkillDetail>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// List skills for any of the given profiles (directory aggregation).
    pub async fn list_for_profiles(
        pool: &PgPool,
        profile_ids: &[DbId],
    ) -> Result<Vec<ExpertSkillDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM expert_skills es \
             JOIN skills s ON s.id = es.skill_id \
             WHERE es.profile_id = ANY($1) \
             ORDER BY es.profile_id, s.name"
        );
        sqlx::query_as::<_, ExpertSkillDetail>(&query)
            .bind(profile_ids)
            .fetch_all(pool)
            .await
    }

    /// Catalog skills with the number of approved experts carrying each.
    pub async fn list_with_expert_counts(
        pool: &PgPool,
    ) -> Result<Vec<SkillWithExpertCount>, sqlx::Error> {
        sqlx::query_as::<_, SkillWithExpertCount>(
            "SELECT s.id, s.name, \
                COUNT(DISTINCT es.profile_id) FILTER (WHERE p.status = 'approved') AS expert_count \
             FROM skills s \
             LEFT JOIN expert_skills es ON es.skill_id = s.id AND es.is_active = true \
             LEFT JOIN expert_profiles p ON p.id = es.profile_id \
             GROUP BY s.id, s.name \
             ORDER BY s.name",
        )
        .fetch_all(pool)
        .await
    }
}
