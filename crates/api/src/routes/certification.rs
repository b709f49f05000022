//! Route definitions for the `/certifications` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::certification;
use crate::state::AppState;

/// Routes mounted at `/certifications`. All scoped to the caller's own
/// profile.
///
/// ```text
/// GET    /        -> list_mine
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(certification::list_mine).post(certification::create),
        )
        .route("/{id}", delete(certification::delete))
}
