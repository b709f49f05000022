//! Route definitions for skill-scoped endorsements.

use axum::routing::post;
use axum::Router;

use crate::handlers::endorsement;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// POST   /{expert_skill_id}/endorsements  -> endorsement::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{expert_skill_id}/endorsements", post(endorsement::create))
}
