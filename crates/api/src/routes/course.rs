//! Route definitions for the `/courses` resource, including the
//! enrollment sub-resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{course, enrollment};
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create (approved experts)
/// GET    /{id}               -> get_by_id
/// DELETE /{id}               -> delete (owner)
/// POST   /{id}/enrollment    -> enroll
/// DELETE /{id}/enrollment    -> cancel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list).post(course::create))
        .route("/{id}", get(course::get_by_id).delete(course::delete))
        .route(
            "/{id}/enrollment",
            post(enrollment::enroll).delete(enrollment::cancel),
        )
}
