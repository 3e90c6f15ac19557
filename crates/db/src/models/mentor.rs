//! Mentor entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use slotwise_core::types::DbId;
use validator::Validate;

/// A row from the `mentors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mentor {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// DTO for creating a mentor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMentor {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub department: String,
}

/// DTO for replacing a mentor. Every column is overwritten.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMentor {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub department: String,
}
