//! Shared fixtures for database integration tests.

use sqlx::PgPool;
use smedir_core::types::DbId;

/// Insert an active employee, returning its id.
pub async fn seed_employee(pool: &PgPool, first_name: &str, last_name: &str) -> DbId {
    let email = format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    sqlx::query_scalar(
        "INSERT INTO employees (email, first_name, last_name, position) \
         VALUES ($1, $2, $3, 'Engineer') RETURNING id",
    )
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .expect("seed employee")
}

/// Insert a department, returning its id.
pub async fn seed_department(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO departments (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("seed department")
}

/// Insert a `submitted` nomination for an employee pair.
pub async fn seed_nomination(pool: &PgPool, nominee_id: DbId, nominator_id: DbId) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO nominations (nominee_id, nominator_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(nominee_id)
    .bind(nominator_id)
    .fetch_one(pool)
    .await
    .expect("seed nomination")
}

/// Insert an approved profile directly, bypassing the nomination gate.
pub async fn seed_profile(pool: &PgPool, employee_id: DbId) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO expert_profiles (employee_id, bio) VALUES ($1, 'bio') RETURNING id",
    )
    .bind(employee_id)
    .fetch_one(pool)
    .await
    .expect("seed profile")
}

/// Insert a published course owned by the given profile.
pub async fn seed_course(pool: &PgPool, profile_id: DbId, max_capacity: Option<i32>) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO courses (profile_id, title, delivery_mode, max_capacity) \
         VALUES ($1, 'Intro Session', 'virtual', $2) RETURNING id",
    )
    .bind(profile_id)
    .bind(max_capacity)
    .fetch_one(pool)
    .await
    .expect("seed course")
}
