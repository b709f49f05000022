//! HTTP-level tests for the profile lifecycle endpoints.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

fn profile_payload() -> serde_json::Value {
    serde_json::json!({
        "bio": "Twenty years of plant hydraulics",
        "availability": {
            "monday": { "enabled": true, "start": "09:00", "end": "17:00" }
        },
        "contact_phone": "+1 (555) 123-4567",
        "contact_preference": "email",
        "skills": [
            { "name": "Hydraulics", "proficiency": "expert", "years_experience": 12 }
        ]
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_profile_without_nomination_returns_403(pool: PgPool) {
    let employee = common::seed_employee(&pool, "Ana", "Silva").await;

    let app = common::build_test_app(pool);
    let token = common::token_for(employee);
    let response = common::post_json(app, "/api/v1/profiles", &token, profile_payload()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = common::body_json(response).await;
    assert_eq!(
        json["error"],
        "You must be nominated before creating an expert profile"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_profile_approves_nomination(pool: PgPool) {
    let (nominee, _leader) = common::seed_nominated_employee(&pool, "Ana", "Silva").await;

    let app = common::build_test_app(pool.clone());
    let token = common::token_for(nominee);
    let response = common::post_json(app, "/api/v1/profiles", &token, profile_payload()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "approved");
    assert_eq!(json["skills"][0]["skill_name"], "Hydraulics");
    assert_eq!(json["skills"][0]["endorsement_count"], 0);

    // Completing the form flips the nomination.
    let status: String = sqlx::query_scalar("SELECT status FROM nominations WHERE nominee_id = $1")
        .bind(nominee)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "approved");

    // Second attempt conflicts.
    let app = common::build_test_app(pool);
    let response = common::post_json(app, "/api/v1/profiles", &token, profile_payload()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_availability_rejected(pool: PgPool) {
    let (nominee, _leader) = common::seed_nominated_employee(&pool, "Ana", "Silva").await;

    let mut payload = profile_payload();
    payload["availability"] =
        serde_json::json!({ "monday": { "enabled": true, "start": "17:00", "end": "09:00" } });

    let app = common::build_test_app(pool);
    let token = common::token_for(nominee);
    let response = common::post_json(app, "/api/v1/profiles", &token, payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_proficiency_rejected(pool: PgPool) {
    let (nominee, _leader) = common::seed_nominated_employee(&pool, "Ana", "Silva").await;

    let mut payload = profile_payload();
    payload["skills"] =
        serde_json::json!([{ "name": "Hydraulics", "proficiency": "wizard" }]);

    let app = common::build_test_app(pool);
    let token = common::token_for(nominee);
    let response = common::post_json(app, "/api/v1/profiles", &token, payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_me_404_before_creation_200_after(pool: PgPool) {
    let (nominee, _leader) = common::seed_nominated_employee(&pool, "Ana", "Silva").await;
    let token = common::token_for(nominee);

    let app = common::build_test_app(pool.clone());
    let response = common::get(app, "/api/v1/profiles/me", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    common::post_json(app, "/api/v1/profiles", &token, profile_payload()).await;

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/profiles/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["bio"], "Twenty years of plant hydraulics");
    assert!(json["certifications"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_me_partial(pool: PgPool) {
    let (nominee, _leader) = common::seed_nominated_employee(&pool, "Ana", "Silva").await;
    let token = common::token_for(nominee);

    let app = common::build_test_app(pool.clone());
    common::post_json(app, "/api/v1/profiles", &token, profile_payload()).await;

    let app = common::build_test_app(pool);
    let response = common::put_json(
        app,
        "/api/v1/profiles/me",
        &token,
        serde_json::json!({
            "bio": "Updated bio",
            "skills": [
                { "name": "Pneumatics", "proficiency": "advanced", "years_experience": 4 }
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["bio"], "Updated bio");
    // Unsupplied fields keep their values.
    assert_eq!(json["contact_preference"], "email");
    // A supplied skill list replaces the full set.
    assert_eq!(json["skills"].as_array().unwrap().len(), 1);
    assert_eq!(json["skills"][0]["skill_name"], "Pneumatics");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_toggle_round_trip(pool: PgPool) {
    let (nominee, _leader) = common::seed_nominated_employee(&pool, "Ana", "Silva").await;
    let token = common::token_for(nominee);

    let app = common::build_test_app(pool.clone());
    common::post_json(app, "/api/v1/profiles", &token, profile_payload()).await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_empty(app, "/api/v1/profiles/me/status-toggle", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "inactive");

    let app = common::build_test_app(pool);
    let response = common::post_empty(app, "/api/v1/profiles/me/status-toggle", &token).await;
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "approved");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owner_toggle_overrides_suspension(pool: PgPool) {
    let (nominee, _leader) = common::seed_nominated_employee(&pool, "Ana", "Silva").await;
    let token = common::token_for(nominee);

    let app = common::build_test_app(pool.clone());
    common::post_json(app, "/api/v1/profiles", &token, profile_payload()).await;
    sqlx::query("UPDATE expert_profiles SET status = 'suspended' WHERE employee_id = $1")
        .bind(nominee)
        .execute(&pool)
        .await
        .unwrap();

    // Long-standing behavior: a suspended profile toggles straight back
    // to approved.
    let app = common::build_test_app(pool);
    let response = common::post_empty(app, "/api/v1/profiles/me/status-toggle", &token).await;
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "approved");
}

/// Seed an approved expert plus a coordinator with authority over the
/// expert's department. Returns (expert_id, coordinator_id).
async fn seed_expert_and_coordinator(pool: &PgPool) -> (i64, i64) {
    let (nominee, _leader) = common::seed_nominated_employee(pool, "Ana", "Silva").await;
    let dept = common::seed_department(pool, "Maintenance").await;
    common::set_department(pool, nominee, dept).await;

    let token = common::token_for(nominee);
    let app = common::build_test_app(pool.clone());
    common::post_json(app, "/api/v1/profiles", &token, profile_payload()).await;

    let coordinator = common::seed_employee(pool, "Cora", "Diaz").await;
    common::assign_role(pool, coordinator, "coordinator").await;
    common::assign_coordinator_department(pool, coordinator, dept).await;

    (nominee, coordinator)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_coordinator_suspends_profile(pool: PgPool) {
    let (expert, coordinator) = seed_expert_and_coordinator(&pool).await;

    let app = common::build_test_app(pool);
    let token = common::token_for(coordinator);
    let response = common::put_json(
        app,
        &format!("/api/v1/profiles/{expert}/status"),
        &token,
        serde_json::json!({ "status": "suspended" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "suspended");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_coordinator_cannot_set_inactive(pool: PgPool) {
    let (expert, coordinator) = seed_expert_and_coordinator(&pool).await;

    let app = common::build_test_app(pool);
    let token = common::token_for(coordinator);
    let response = common::put_json(
        app,
        &format!("/api/v1/profiles/{expert}/status"),
        &token,
        serde_json::json!({ "status": "inactive" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_coordinator_outside_department_forbidden(pool: PgPool) {
    let (expert, _coordinator) = seed_expert_and_coordinator(&pool).await;

    // A coordinator with no authority over the expert's department.
    let outsider = common::seed_employee(&pool, "Omar", "Haddad").await;
    common::assign_role(&pool, outsider, "coordinator").await;

    let app = common::build_test_app(pool);
    let token = common::token_for(outsider);
    let response = common::put_json(
        app,
        &format!("/api/v1/profiles/{expert}/status"),
        &token,
        serde_json::json!({ "status": "suspended" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "You don't have access to this SME's department");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_coordinator_deletes_profile_and_rejects_nomination(pool: PgPool) {
    let (expert, coordinator) = seed_expert_and_coordinator(&pool).await;

    let app = common::build_test_app(pool.clone());
    let token = common::token_for(coordinator);
    let response = common::delete(app, &format!("/api/v1/profiles/{expert}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The profile is gone and the nomination is forced to rejected.
    let profile_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM expert_profiles WHERE employee_id = $1")
            .bind(expert)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(profile_count, 0);

    let status: String = sqlx::query_scalar("SELECT status FROM nominations WHERE nominee_id = $1")
        .bind(expert)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "rejected");
}
