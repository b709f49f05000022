//! Handlers for the read-only directory browsing endpoints.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use smedir_db::models::department::Department;
use smedir_db::models::profile::ExpertSummary;
use smedir_db::models::skill::SkillWithExpertCount;
use smedir_db::repositories::{DepartmentRepo, SkillRepo};
use smedir_db::repositories::directory_repo::{DirectoryRepo, ExpertFilter};

use crate::error::AppResult;
use crate::middleware::identity::Identity;
use crate::state::AppState;

/// Query parameters for the expert search. All filters are optional and
/// combine with AND.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring over names and bios.
    pub q: Option<String>,
    /// Exact skill name.
    pub skill: Option<String>,
    /// Exact department name.
    pub department: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// GET /api/v1/directory/experts
pub async fn experts(
    _identity: Identity,
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<ExpertSummary>>> {
    let filter = ExpertFilter {
        query: non_empty(params.q),
        skill: non_empty(params.skill),
        department: non_empty(params.department),
    };

    let experts = DirectoryRepo::search_experts(&state.pool, &filter).await?;
    Ok(Json(experts))
}

/// GET /api/v1/directory/skills
///
/// The skill catalog with the number of approved experts carrying each
/// skill. Feeds the filter dropdown.
pub async fn skills(
    _identity: Identity,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SkillWithExpertCount>>> {
    let skills = SkillRepo::list_with_expert_counts(&state.pool).await?;
    Ok(Json(skills))
}

/// GET /api/v1/directory/departments
pub async fn departments(
    _identity: Identity,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Department>>> {
    let departments = DepartmentRepo::list(&state.pool).await?;
    Ok(Json(departments))
}
