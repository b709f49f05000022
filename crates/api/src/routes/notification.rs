//! Route definitions for the `/notifications` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    /                -> list
/// GET    /unread-count    -> unread_count
/// PUT    /read-all        -> mark_all_read
/// GET    /preferences     -> get_preferences
/// PUT    /preferences     -> update_preferences
/// PUT    /{id}/read       -> mark_read
/// DELETE /{id}            -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list))
        .route("/unread-count", get(notification::unread_count))
        .route("/read-all", put(notification::mark_all_read))
        .route(
            "/preferences",
            get(notification::get_preferences).put(notification::update_preferences),
        )
        .route("/{id}/read", put(notification::mark_read))
        .route("/{id}", delete(notification::delete))
}
