pub mod assignment;
pub mod auth;
pub mod health;
pub mod intern;
pub mod mentor;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /signup                        register (public)
/// /login                         login (public)
/// /me                            current account
///
/// /add-mentor                    create
/// /all-mentor                    list
/// /update-mentor/{id}            replace
/// /delete-mentor/{id}            delete
///
/// /add-intern                    create
/// /all-intern                    list with mentor details
/// /update-intern/{id}            replace
/// /delete-intern/{id}            delete
///
/// /add-project                   create
/// /all-project                   list
/// /update-project/{id}           replace
/// /delete-project/{id}           delete
///
/// /add-assignment                create
/// /all-assignment                list with intern and project names
/// /update-assignment/{id}        replace
/// /delete-assignment/{id}        delete
/// ```
///
/// Every route except signup and login requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(mentor::router())
        .merge(intern::router())
        .merge(project::router())
        .merge(assignment::router())
}
