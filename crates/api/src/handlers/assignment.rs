//! Handlers for the assignment resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use slotwise_core::error::CoreError;
use slotwise_db::models::assignment::{AssignmentDetail, CreateAssignment, UpdateAssignment};
use slotwise_db::repositories::AssignmentRepo;

use crate::error::{missing_reference, AppError, AppResult};
use crate::extract::{IdPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::{IdResponse, MessageResponse};
use crate::state::AppState;

const UNKNOWN_REFERENCE: &str = "intern_id and project_id must reference existing rows";

/// POST /api/add-assignment
///
/// New assignments start at progress 0.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<CreateAssignment>,
) -> AppResult<(StatusCode, Json<IdResponse>)> {
    let assignment = AssignmentRepo::create(&state.pool, &input)
        .await
        .map_err(|e| missing_reference(e, UNKNOWN_REFERENCE))?;
    tracing::info!(
        assignment_id = assignment.id,
        account_id = user.account_id,
        "Assignment created"
    );
    Ok((StatusCode::CREATED, Json(IdResponse { id: assignment.id })))
}

/// GET /api/all-assignment
///
/// Each assignment carries the intern and project names.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<AssignmentDetail>>> {
    let assignments = AssignmentRepo::list_detailed(&state.pool).await?;
    Ok(Json(assignments))
}

/// PUT /api/update-assignment/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateAssignment>,
) -> AppResult<Json<MessageResponse>> {
    AssignmentRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| missing_reference(e, UNKNOWN_REFERENCE))?
        .ok_or(AppError::Core(CoreError::not_found("Assignment", id)))?;
    tracing::info!(assignment_id = id, account_id = user.account_id, "Assignment updated");
    Ok(Json(MessageResponse::new("Assignment updated successfully")))
}

/// DELETE /api/delete-assignment/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let deleted = AssignmentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Assignment", id)));
    }
    tracing::info!(assignment_id = id, account_id = user.account_id, "Assignment deleted");
    Ok(Json(MessageResponse::new("Assignment deleted successfully")))
}
