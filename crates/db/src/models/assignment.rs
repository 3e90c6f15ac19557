//! Assignment entity model and DTOs.
//!
//! An assignment links one intern to one project and tracks progress as a
//! percentage.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use slotwise_core::types::DbId;
use validator::Validate;

/// A row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub intern_id: DbId,
    pub project_id: DbId,
    pub progress: i64,
    pub remarks: String,
}

/// An assignment joined with the intern and project display names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssignmentDetail {
    pub id: DbId,
    pub intern_id: DbId,
    pub intern_name: Option<String>,
    pub project_id: DbId,
    pub project_name: Option<String>,
    pub progress: i64,
    pub remarks: String,
}

/// DTO for creating an assignment. Progress starts at 0.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAssignment {
    #[serde(alias = "internId")]
    pub intern_id: DbId,
    #[serde(alias = "projectId")]
    pub project_id: DbId,
    pub remarks: String,
}

/// DTO for replacing an assignment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAssignment {
    #[serde(alias = "internId")]
    pub intern_id: DbId,
    #[serde(alias = "projectId")]
    pub project_id: DbId,
    #[validate(range(min = 0, max = 100, message = "must be between 0 and 100"))]
    pub progress: i64,
    pub remarks: String,
}
