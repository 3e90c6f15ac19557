use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Project routes.
///
/// ```text
/// POST   /add-project              -> create
/// GET    /all-project              -> list
/// PUT    /update-project/{id}      -> update
/// DELETE /delete-project/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-project", post(project::create))
        .route("/all-project", get(project::list))
        .route("/update-project/{id}", put(project::update))
        .route("/delete-project/{id}", delete(project::delete))
}
