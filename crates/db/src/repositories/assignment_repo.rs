//! Repository for the `assignments` table.

use sqlx::SqlitePool;
use slotwise_core::types::DbId;

use crate::models::assignment::{
    Assignment, AssignmentDetail, CreateAssignment, UpdateAssignment,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, intern_id, project_id, progress, remarks";

/// Provides CRUD operations for assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new assignment with zero progress, returning the created row.
    ///
    /// Fails with a foreign key violation if either referenced row is missing.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateAssignment,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments (intern_id, project_id, remarks)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(input.intern_id)
            .bind(input.project_id)
            .bind(&input.remarks)
            .fetch_one(pool)
            .await
    }

    /// Find an assignment by internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE id = ?1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assignments with intern and project names, in insertion order.
    pub async fn list_detailed(pool: &SqlitePool) -> Result<Vec<AssignmentDetail>, sqlx::Error> {
        sqlx::query_as::<_, AssignmentDetail>(
            "SELECT a.id, a.intern_id, i.name AS intern_name,
                    a.project_id, p.name AS project_name,
                    a.progress, a.remarks
             FROM assignments AS a
             LEFT JOIN interns AS i ON i.id = a.intern_id
             LEFT JOIN projects AS p ON p.id = a.project_id
             ORDER BY a.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Replace every column of an assignment.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateAssignment,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!(
            "UPDATE assignments SET intern_id = ?2, project_id = ?3, progress = ?4, remarks = ?5
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .bind(input.intern_id)
            .bind(input.project_id)
            .bind(input.progress)
            .bind(&input.remarks)
            .fetch_optional(pool)
            .await
    }

    /// Delete an assignment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assignments WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
