//! Intern entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use slotwise_core::types::DbId;
use validator::Validate;

/// A row from the `interns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Intern {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub status: String,
    pub mentor_id: DbId,
}

/// An intern joined with its mentor's contact details.
///
/// The mentor columns come from a LEFT JOIN and are `None` when the mentor
/// row cannot be resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InternWithMentor {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub status: String,
    pub mentor_id: DbId,
    pub mentor_name: Option<String>,
    pub mentor_email: Option<String>,
}

/// DTO for creating an intern. Status starts as `active`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIntern {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[serde(alias = "mentorId")]
    pub mentor_id: DbId,
}

/// DTO for replacing an intern.
///
/// An omitted `status` resets the row to the default status.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateIntern {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[serde(alias = "mentorId")]
    pub mentor_id: DbId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub status: Option<String>,
}
