//! Handlers for the mentor resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use slotwise_core::error::CoreError;
use slotwise_db::models::mentor::{CreateMentor, Mentor, UpdateMentor};
use slotwise_db::repositories::MentorRepo;

use crate::error::{still_referenced, AppError, AppResult};
use crate::extract::{IdPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::{IdResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/add-mentor
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<CreateMentor>,
) -> AppResult<(StatusCode, Json<IdResponse>)> {
    let mentor = MentorRepo::create(&state.pool, &input).await?;
    tracing::info!(mentor_id = mentor.id, account_id = user.account_id, "Mentor created");
    Ok((StatusCode::CREATED, Json(IdResponse { id: mentor.id })))
}

/// GET /api/all-mentor
pub async fn list(State(state): State<AppState>, _user: AuthUser) -> AppResult<Json<Vec<Mentor>>> {
    let mentors = MentorRepo::list(&state.pool).await?;
    Ok(Json(mentors))
}

/// PUT /api/update-mentor/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateMentor>,
) -> AppResult<Json<MessageResponse>> {
    MentorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Mentor", id)))?;
    tracing::info!(mentor_id = id, account_id = user.account_id, "Mentor updated");
    Ok(Json(MessageResponse::new("Mentor updated successfully")))
}

/// DELETE /api/delete-mentor/{id}
///
/// Refused with 409 while any intern is still assigned to the mentor.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let deleted = MentorRepo::delete(&state.pool, id)
        .await
        .map_err(|e| still_referenced(e, "Mentor still has interns assigned"))?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Mentor", id)));
    }
    tracing::info!(mentor_id = id, account_id = user.account_id, "Mentor deleted");
    Ok(Json(MessageResponse::new("Mentor deleted successfully")))
}
