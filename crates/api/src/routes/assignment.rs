use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::assignment;
use crate::state::AppState;

/// Assignment routes.
///
/// ```text
/// POST   /add-assignment              -> create
/// GET    /all-assignment              -> list
/// PUT    /update-assignment/{id}      -> update
/// DELETE /delete-assignment/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-assignment", post(assignment::create))
        .route("/all-assignment", get(assignment::list))
        .route("/update-assignment/{id}", put(assignment::update))
        .route("/delete-assignment/{id}", delete(assignment::delete))
}
