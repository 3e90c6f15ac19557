//! Handlers for the project resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use slotwise_core::error::CoreError;
use slotwise_core::validation::check_date_range;
use slotwise_db::models::project::{CreateProject, Project, UpdateProject};
use slotwise_db::repositories::ProjectRepo;

use crate::error::{still_referenced, AppError, AppResult};
use crate::extract::{IdPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::{IdResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/add-project
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<CreateProject>,
) -> AppResult<(StatusCode, Json<IdResponse>)> {
    check_date_range(input.start_date, input.end_date)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, account_id = user.account_id, "Project created");
    Ok((StatusCode::CREATED, Json(IdResponse { id: project.id })))
}

/// GET /api/all-project
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// PUT /api/update-project/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateProject>,
) -> AppResult<Json<MessageResponse>> {
    check_date_range(input.start_date, input.end_date)?;
    ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Project", id)))?;
    tracing::info!(project_id = id, account_id = user.account_id, "Project updated");
    Ok(Json(MessageResponse::new("Project updated successfully")))
}

/// DELETE /api/delete-project/{id}
///
/// Refused with 409 while any assignment still points at the project.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id)
        .await
        .map_err(|e| still_referenced(e, "Project still has assignments"))?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Project", id)));
    }
    tracing::info!(project_id = id, account_id = user.account_id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
