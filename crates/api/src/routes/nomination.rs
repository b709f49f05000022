//! Route definitions for the `/nominations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::nomination;
use crate::state::AppState;

/// Routes mounted at `/nominations`.
///
/// ```text
/// POST   /        -> create (team leader)
/// GET    /        -> list (coordinator)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(nomination::list).post(nomination::create))
}
