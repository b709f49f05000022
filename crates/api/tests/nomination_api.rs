//! HTTP-level tests for the nomination endpoints.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_leader_nominates_returns_201(pool: PgPool) {
    let leader = common::seed_employee(&pool, "Lee", "Park").await;
    common::assign_role(&pool, leader, "team_leader").await;
    let nominee = common::seed_employee(&pool, "Ana", "Silva").await;
    let dept = common::seed_department(&pool, "Maintenance").await;
    common::set_department(&pool, nominee, dept).await;

    let app = common::build_test_app(pool);
    let token = common::token_for(leader);
    let response = common::post_json(
        app,
        "/api/v1/nominations",
        &token,
        serde_json::json!({ "nominee_id": nominee }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "submitted");
    assert_eq!(json["nominee_id"], nominee);
    assert_eq!(json["nominator_id"], leader);
    // Department name is snapshotted at nomination time.
    assert_eq!(json["department_name"], "Maintenance");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_plain_employee_cannot_nominate(pool: PgPool) {
    let caller = common::seed_employee(&pool, "Lee", "Park").await;
    let nominee = common::seed_employee(&pool, "Ana", "Silva").await;

    let app = common::build_test_app(pool);
    let token = common::token_for(caller);
    let response = common::post_json(
        app,
        "/api/v1/nominations",
        &token,
        serde_json::json!({ "nominee_id": nominee }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "Only team leaders can nominate experts");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_self_nomination_returns_400(pool: PgPool) {
    let leader = common::seed_employee(&pool, "Lee", "Park").await;
    common::assign_role(&pool, leader, "team_leader").await;

    let app = common::build_test_app(pool);
    let token = common::token_for(leader);
    let response = common::post_json(
        app,
        "/api/v1/nominations",
        &token,
        serde_json::json!({ "nominee_id": leader }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "You cannot nominate yourself");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_nominee_returns_404(pool: PgPool) {
    let leader = common::seed_employee(&pool, "Lee", "Park").await;
    common::assign_role(&pool, leader, "team_leader").await;

    let app = common::build_test_app(pool);
    let token = common::token_for(leader);
    let response = common::post_json(
        app,
        "/api/v1/nominations",
        &token,
        serde_json::json!({ "nominee_id": 999_999 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pending_nomination_blocks_repeat(pool: PgPool) {
    let leader = common::seed_employee(&pool, "Lee", "Park").await;
    common::assign_role(&pool, leader, "team_leader").await;
    let nominee = common::seed_employee(&pool, "Ana", "Silva").await;

    let token = common::token_for(leader);
    let app = common::build_test_app(pool.clone());
    common::post_json(
        app,
        "/api/v1/nominations",
        &token,
        serde_json::json!({ "nominee_id": nominee }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/nominations",
        &token,
        serde_json::json!({ "nominee_id": nominee }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "This employee already has a pending nomination");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_existing_profile_blocks_nomination(pool: PgPool) {
    let leader = common::seed_employee(&pool, "Lee", "Park").await;
    common::assign_role(&pool, leader, "team_leader").await;
    let nominee = common::seed_employee(&pool, "Ana", "Silva").await;
    sqlx::query("INSERT INTO expert_profiles (employee_id) VALUES ($1)")
        .bind(nominee)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let token = common::token_for(leader);
    let response = common::post_json(
        app,
        "/api/v1/nominations",
        &token,
        serde_json::json!({ "nominee_id": nominee }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "This employee already has an expert profile");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_coordinator_lists_nominations_filtered(pool: PgPool) {
    let (nominee, _leader) = common::seed_nominated_employee(&pool, "Ana", "Silva").await;
    let coordinator = common::seed_employee(&pool, "Cora", "Diaz").await;
    common::assign_role(&pool, coordinator, "coordinator").await;

    let token = common::token_for(coordinator);

    let app = common::build_test_app(pool.clone());
    let response = common::get(app, "/api/v1/nominations?status=submitted", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["nominee_id"], nominee);

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/nominations?status=approved", &token).await;
    let json = common::body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_status_filter_returns_400(pool: PgPool) {
    let coordinator = common::seed_employee(&pool, "Cora", "Diaz").await;
    common::assign_role(&pool, coordinator, "coordinator").await;

    let app = common::build_test_app(pool);
    let token = common::token_for(coordinator);
    let response = common::get(app, "/api/v1/nominations?status=bogus", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_coordinator_cannot_list(pool: PgPool) {
    let employee = common::seed_employee(&pool, "Ana", "Silva").await;

    let app = common::build_test_app(pool);
    let token = common::token_for(employee);
    let response = common::get(app, "/api/v1/nominations", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
