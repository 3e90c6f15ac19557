//! Handlers for the intern resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use slotwise_core::error::CoreError;
use slotwise_db::models::intern::{CreateIntern, InternWithMentor, UpdateIntern};
use slotwise_db::repositories::InternRepo;

use crate::error::{missing_reference, still_referenced, AppError, AppResult};
use crate::extract::{IdPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::response::{IdResponse, MessageResponse};
use crate::state::AppState;

const UNKNOWN_MENTOR: &str = "mentor_id does not reference an existing mentor";

/// POST /api/add-intern
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<CreateIntern>,
) -> AppResult<(StatusCode, Json<IdResponse>)> {
    let intern = InternRepo::create(&state.pool, &input)
        .await
        .map_err(|e| missing_reference(e, UNKNOWN_MENTOR))?;
    tracing::info!(intern_id = intern.id, account_id = user.account_id, "Intern created");
    Ok((StatusCode::CREATED, Json(IdResponse { id: intern.id })))
}

/// GET /api/all-intern
///
/// Each intern carries its mentor's name and email.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<InternWithMentor>>> {
    let interns = InternRepo::list_with_mentor(&state.pool).await?;
    Ok(Json(interns))
}

/// PUT /api/update-intern/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateIntern>,
) -> AppResult<Json<MessageResponse>> {
    InternRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| missing_reference(e, UNKNOWN_MENTOR))?
        .ok_or(AppError::Core(CoreError::not_found("Intern", id)))?;
    tracing::info!(intern_id = id, account_id = user.account_id, "Intern updated");
    Ok(Json(MessageResponse::new("Intern updated successfully")))
}

/// DELETE /api/delete-intern/{id}
///
/// Refused with 409 while the intern still has assignments.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let deleted = InternRepo::delete(&state.pool, id)
        .await
        .map_err(|e| still_referenced(e, "Intern still has assignments"))?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Intern", id)));
    }
    tracing::info!(intern_id = id, account_id = user.account_id, "Intern deleted");
    Ok(Json(MessageResponse::new("Intern deleted successfully")))
}
