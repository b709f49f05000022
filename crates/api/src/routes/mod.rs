pub mod certification;
pub mod course;
pub mod directory;
pub mod health;
pub mod nomination;
pub mod notification;
pub mod profile;
pub mod skill;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /nominations                        submit (team leader), list (coordinator)
///
/// /profiles                           create own profile (nomination-gated)
/// /profiles/me                        get, update own profile
/// /profiles/me/status-toggle          owner availability switch (POST)
/// /profiles/{id}                      get by employee, delete (coordinator)
/// /profiles/{id}/status               coordinator suspend/reinstate (PUT)
/// /profiles/{id}/endorsed-skills      caller's endorsed skill ids (GET)
///
/// /skills/{expert_skill_id}/endorsements  endorse a skill (POST)
///
/// /certifications                     list, create (own profile)
/// /certifications/{id}                delete (own profile)
///
/// /courses                            list published, create (approved experts)
/// /courses/{id}                       get, delete (owner)
/// /courses/{id}/enrollment            enroll (POST), cancel (DELETE)
///
/// /notifications                      inbox listing
/// /notifications/unread-count         unread badge count
/// /notifications/read-all             mark everything read (PUT)
/// /notifications/{id}/read            mark one read (PUT)
/// /notifications/{id}                 delete
/// /notifications/preferences          get, update toggles
///
/// /directory/experts                  filtered expert search
/// /directory/skills                   skill catalog with expert counts
/// /directory/departments              department list for filters
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/nominations", nomination::router())
        .nest("/profiles", profile::router())
        .nest("/skills", skill::router())
        .nest("/certifications", certification::router())
        .nest("/courses", course::router())
        .nest("/notifications", notification::router())
        .nest("/directory", directory::router())
}
