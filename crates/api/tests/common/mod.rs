use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use smedir_api::auth::jwt::{generate_access_token, JwtConfig};
use smedir_api::config::ServerConfig;
use smedir_api::routes;
use smedir_api::state::AppState;
use smedir_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
        event_bus: Arc::new(smedir_events::EventBus::default()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Mint a bearer token for a seeded employee, matching the test config's
/// signing secret.
pub fn token_for(employee_id: DbId) -> String {
    generate_access_token(employee_id, &test_config().jwt).expect("token generation")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn get_anonymous(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn put_empty(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), None).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert an active employee, returning its id. The email is derived from
/// the name so fixtures stay unique per test database.
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

/// Put an employee into a department.
pub async fn set_department(pool: &PgPool, employee_id: DbId, department_id: DbId) {
    sqlx::query("UPDATE employees SET department_id = $2 WHERE id = $1")
        .bind(employee_id)
        .bind(department_id)
        .execute(pool)
        .await
        .expect("set department");
}

/// Grant a role (by seeded code) to an employee.
pub async fn assign_role(pool: &PgPool, employee_id: DbId, code: &str) {
    sqlx::query(
        "INSERT INTO employee_roles (employee_id, role_id) \
         SELECT $1, id FROM roles WHERE code = $2",
    )
    .bind(employee_id)
    .bind(code)
    .execute(pool)
    .await
    .expect("assign role");
}

/// Grant a coordinator authority over a department.
pub async fn assign_coordinator_department(
    pool: &PgPool,
    employee_id: DbId,
    department_id: DbId,
) {
    sqlx::query(
        "INSERT INTO coordinator_departments (employee_id, department_id) VALUES ($1, $2)",
    )
    .bind(employee_id)
    .bind(department_id)
    .execute(pool)
    .await
    .expect("assign coordinator department");
}

/// Shorthand: a nominated employee ready to create their profile.
///
/// Seeds a team leader, the nominee, and a `submitted` nomination from
/// the leader. Returns (nominee_id, nominator_id).
pub async fn seed_nominated_employee(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
) -> (DbId, DbId) {
    let leader = seed_employee(pool, "Lena", "Ortiz").await;
    assign_role(pool, leader, "team_leader").await;
    let nominee = seed_employee(pool, first_name, last_name).await;
    sqlx::query("INSERT INTO nominations (nominee_id, nominator_id) VALUES ($1, $2)")
        .bind(nominee)
        .bind(leader)
        .execute(pool)
        .await
        .expect("seed nomination");
    (nominee, leader)
}
