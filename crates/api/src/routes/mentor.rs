use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::mentor;
use crate::state::AppState;

/// Mentor routes.
///
/// ```text
/// POST   /add-mentor              -> create
/// GET    /all-mentor              -> list
/// PUT    /update-mentor/{id}      -> update
/// DELETE /delete-mentor/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-mentor", post(mentor::create))
        .route("/all-mentor", get(mentor::list))
        .route("/update-mentor/{id}", put(mentor::update))
        .route("/delete-mentor/{id}", delete(mentor::delete))
}
