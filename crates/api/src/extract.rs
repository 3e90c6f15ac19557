//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so every failure carries the JSON error body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use slotwise_core::error::CoreError;
use slotwise_core::types::DbId;
use validator::Validate;

use crate::error::AppError;

/// JSON request body that has been deserialized and validated.
///
/// An empty body, malformed JSON or a wrong content type is a 400
/// `BAD_REQUEST`. A missing, `null` or mistyped field and any field rule
/// violation is a 400 `VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            AppError::Core(CoreError::Validation(err.body_text()))
        }
        other => AppError::BadRequest(other.body_text()),
    }
}

/// The `{id}` segment of a resource path.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Path id must be an integer".into()))?;
        Ok(IdPath(id))
    }
}
