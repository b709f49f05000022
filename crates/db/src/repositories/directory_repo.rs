//! Read-only aggregation queries behind the directory browsing UI.

use std::collections::HashMap;

use sqlx::PgPool;
use smedir_core::types::DbId;

use crate::models::profile::{ExpertSummary, ExpertSummaryRow};
use crate::repositories::SkillRepo;

/// Optional filters for the expert search.
#[derive(Debug, Default)]
pub struct ExpertFilter {
    /// Case-insensitive substring over name and bio.
    pub query: Option<String>,
    /// Exact skill name.
    pub skill: Option<String>,
    /// Exact department name.
    pub department: Option<String>,
}

/// Provides the directory search queries. Approved profiles only.
pub struct DirectoryRepo;

impl DirectoryRepo {
    /// Search approved experts with their skills attached.
    pub async fn search_experts(
        pool: &PgPool,
        filter: &ExpertFilter,
    ) -> Result<Vec<ExpertSummary>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ExpertSummaryRow>(
            "SELECT p.id AS profile_id, e.id AS employee_id, e.first_name, e.last_name, \
                    d.name AS department_name, e.position, p.bio \
             FROM expert_profiles p \
             JOIN employees e ON e.id = p.employee_id \
             LEFT JOIN departments d ON d.id = e.department_id \
             WHERE p.status = 'approved' \
               AND e.is_active = true \
               AND ($1::text IS NULL \
                    OR e.first_name ILIKE '%' || $1 || '%' \
                    OR e.last_name ILIKE '%' || $1 || '%' \
                    OR p.bio ILIKE '%' || $1 || '%') \
               AND ($2::text IS NULL OR EXISTS ( \
                    SELECT 1 FROM expert_skills es \
                    JOIN skills s ON s.id = es.skill_id \
                    WHERE es.profile_id = p.id AND es.is_active = true AND s.name = $2)) \
               AND ($3::text IS NULL OR d.name = $3) \
             ORDER BY e.last_name, e.first_name",
        )
        .bind(&filter.query)
        .bind(&filter.skill)
        .bind(&filter.department)
        .fetch_all(pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let profile_ids: Vec<DbId> = rows.iter().map(|r| r.profile_id).collect();
        let mut skills_by_profile: HashMap<DbId, Vec<_>> = HashMap::new();
        for skill in SkillRepo::list_for_profiles(pool, &profile_ids).await? {
            skills_by_profile
                .entry(skill.profile_id)
                .or_default()
                .push(skill);
        }

        Ok(rows
            .into_iter()
            .map(|expert| {
                let skills = skills_by_profile
                    .remove(&expert.profile_id)
                    .unwrap_or_default();
                ExpertSummary { expert, skills }
            })
            .collect())
    }
}
