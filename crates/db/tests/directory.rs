//! Integration tests for directory search.

mod common;

use sqlx::PgPool;
use smedir_core::types::DbId;
use smedir_db::models::skill::SkillInput;
use smedir_db::repositories::directory_repo::{DirectoryRepo, ExpertFilter};
use smedir_db::repositories::SkillRepo;

async fn add_skill(pool: &PgPool, profile_id: DbId, name: &str) {
    let mut tx = pool.begin().await.unwrap();
    let input = SkillInput {
        name: name.into(),
        proficiency: "advanced".into(),
        years_experience: 3,
    };
    SkillRepo::insert_expert_skill(&mut tx, profile_id, &input)
        .await
        .unwrap();
    tx.commit().await.unwrap();
}

/// Seed an approved expert in a department with one skill. Returns the
/// profile id.
async fn seed_expert(
    pool: &PgPool,
    first: &str,
    last: &str,
    department: &str,
    skill: &str,
) -> DbId {
    let dept = sqlx::query_scalar(
        "INSERT INTO departments (name) VALUES ($1) \
         ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name RETURNING id",
    )
    .bind(department)
    .fetch_one(pool)
    .await
    .unwrap();

    let employee = common::seed_employee(pool, first, last).await;
    sqlx::query("UPDATE employees SET department_id = $2 WHERE id = $1")
        .bind(employee)
        .bind::<DbId>(dept)
        .execute(pool)
        .await
        .unwrap();

    let profile = common::seed_profile(pool, employee).await;
    add_skill(pool, profile, skill).await;
    profile
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unfiltered_search_lists_approved_experts(pool: PgPool) {
    seed_expert(&pool, "Ana", "Silva", "Maintenance", "Hydraulics").await;
    seed_expert(&pool, "Ben", "Okafor", "Quality", "Welding").await;

    let experts = DirectoryRepo::search_experts(&pool, &ExpertFilter::default())
        .await
        .unwrap();
    assert_eq!(experts.len(), 2);
    // Ordered by last name.
    assert_eq!(experts[0].expert.last_name, "Okafor");
    assert_eq!(experts[1].expert.last_name, "Silva");
    assert_eq!(experts[1].skills.len(), 1);
    assert_eq!(experts[1].skills[0].skill_name, "Hydraulics");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_suspended_and_inactive_profiles_hidden(pool: PgPool) {
    let visible = seed_expert(&pool, "Ana", "Silva", "Maintenance", "Hydraulics").await;
    let suspended = seed_expert(&pool, "Ben", "Okafor", "Quality", "Welding").await;
    let inactive = seed_expert(&pool, "Cara", "Lund", "Quality", "Pneumatics").await;

    sqlx::query("UPDATE expert_profiles SET status = 'suspended' WHERE id = $1")
        .bind(suspended)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("UPDATE expert_profiles SET status = 'inactive' WHERE id = $1")
        .bind(inactive)
        .execute(&pool)
        .await
        .unwrap();

    let experts = DirectoryRepo::search_experts(&pool, &ExpertFilter::default())
        .await
        .unwrap();
    assert_eq!(experts.len(), 1);
    assert_eq!(experts[0].expert.profile_id, visible);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filters_combine_with_and(pool: PgPool) {
    seed_expert(&pool, "Ana", "Silva", "Maintenance", "Hydraulics").await;
    seed_expert(&pool, "Ben", "Okafor", "Quality", "Hydraulics").await;

    let filter = ExpertFilter {
        query: None,
        skill: Some("Hydraulics".into()),
        department: Some("Quality".into()),
    };
    let experts = DirectoryRepo::search_experts(&pool, &filter).await.unwrap();
    assert_eq!(experts.len(), 1);
    assert_eq!(experts[0].expert.last_name, "Okafor");

    // Name fragments match case-insensitively.
    let filter = ExpertFilter {
        query: Some("silv".into()),
        skill: None,
        department: None,
    };
    let experts = DirectoryRepo::search_experts(&pool, &filter).await.unwrap();
    assert_eq!(experts.len(), 1);
    assert_eq!(experts[0].expert.last_name, "Silva");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_catalog_counts_approved_experts_only(pool: PgPool) {
    seed_expert(&pool, "Ana", "Silva", "Maintenance", "Hydraulics").await;
    let suspended = seed_expert(&pool, "Ben", "Okafor", "Quality", "Hydraulics").await;
    sqlx::query("UPDATE expert_profiles SET status = 'suspended' WHERE id = $1")
        .bind(suspended)
        .execute(&pool)
        .await
        .unwrap();

    let skills = SkillRepo::list_with_expert_counts(&pool).await.unwrap();
    let hydraulics = skills
        .iter()
        .find(|s| s.name == "Hydraulics")
        .expect("catalog entry");
    assert_eq!(hydraulics.expert_count, 1);
}
