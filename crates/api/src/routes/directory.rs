//! Route definitions for the read-only `/directory` endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::directory;
use crate::state::AppState;

/// Routes mounted at `/directory`.
///
/// ```text
/// GET    /experts        -> experts (filtered search)
/// GET    /skills         -> skills (catalog with expert counts)
/// GET    /departments    -> departments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/experts", get(directory::experts))
        .route("/skills", get(directory::skills))
        .route("/departments", get(directory::departments))
}
