use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::intern;
use crate::state::AppState;

/// Intern routes.
///
/// ```text
/// POST   /add-intern              -> create
/// GET    /all-intern              -> list
/// PUT    /update-intern/{id}      -> update
/// DELETE /delete-intern/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-intern", post(intern::create))
        .route("/all-intern", get(intern::list))
        .route("/update-intern/{id}", put(intern::update))
        .route("/delete-intern/{id}", delete(intern::delete))
}
