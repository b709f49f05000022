//! Route definitions for the `/profiles` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// POST   /                        -> create
/// GET    /me                      -> get_me
/// PUT    /me                      -> update_me
/// POST   /me/status-toggle        -> toggle_my_status
/// GET    /{id}                    -> get_by_employee
/// DELETE /{id}                    -> delete (coordinator)
/// PUT    /{id}/status             -> set_status (coordinator)
/// GET    /{id}/endorsed-skills    -> endorsed_skills
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(profile::create))
        .route("/me", get(profile::get_me).put(profile::update_me))
        .route("/me/status-toggle", post(profile::toggle_my_status))
        .route(
            "/{id}",
            get(profile::get_by_employee).delete(profile::delete),
        )
        .route("/{id}/status", put(profile::set_status))
        .route("/{id}/endorsed-skills", get(profile::endorsed_skills))
}
