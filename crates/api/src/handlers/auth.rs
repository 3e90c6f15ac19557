//! Handlers for signup, login and the current-account lookup.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use slotwise_core::error::CoreError;
use slotwise_core::types::DbId;
use slotwise_db::repositories::AccountRepo;
use validator::Validate;

use crate::auth::service;
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::auth::AuthUser;
use crate::response::SessionResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/signup`.
#[derive(Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Request body for `POST /api/login`.
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Public account info returned by `GET /api/me`.
#[derive(Debug, Serialize)]
pub struct AccountInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/signup
///
/// Register a new account and return its id with a session token.
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let session = service::register(
        &state.pool,
        &state.config.jwt,
        &input.username,
        &input.email,
        &input.password,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            id: session.account_id,
            token: session.token,
        }),
    ))
}

/// POST /api/login
///
/// Authenticate with email + password and return a fresh session token.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    let session =
        service::authenticate(&state.pool, &state.config.jwt, &input.email, &input.password)
            .await?;

    Ok(Json(SessionResponse {
        id: session.account_id,
        token: session.token,
    }))
}

/// GET /api/me
///
/// Return the account the bearer token was issued to.
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<AccountInfo>> {
    let account = AccountRepo::find_by_id(&state.pool, user.account_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Account", user.account_id)))?;

    Ok(Json(AccountInfo {
        id: account.id,
        username: account.username,
        email: account.email,
    }))
}
