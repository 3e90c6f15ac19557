//! Shared response bodies for API handlers.
//!
//! Creates answer with [`IdResponse`], updates and deletes with
//! [`MessageResponse`], and signup/login with [`SessionResponse`].

use serde::Serialize;
use slotwise_core::types::DbId;

/// `{ "id": ... }` -- the identifier assigned to a new row.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: DbId,
}

/// `{ "message": ... }` -- confirmation of a mutation.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "id": ..., "token": ... }` -- the authenticated account and its session token.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: DbId,
    pub token: String,
}
