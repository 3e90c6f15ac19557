//! Repository for the `mentors` table.

use sqlx::SqlitePool;
use slotwise_core::types::DbId;

use crate::models::mentor::{CreateMentor, Mentor, UpdateMentor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, department";

/// Provides CRUD operations for mentors.
pub struct MentorRepo;

impl MentorRepo {
    /// Insert a new mentor, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateMentor) -> Result<Mentor, sqlx::Error> {
        let query = format!(
            "INSERT INTO mentors (name, email, department)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentor>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.department)
            .fetch_one(pool)
            .await
    }

    /// Find a mentor by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors WHERE id = ?1");
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all mentors in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors ORDER BY id ASC");
        sqlx::query_as::<_, Mentor>(&query).fetch_all(pool).await
    }

    /// Replace every column of a mentor.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMentor,
    ) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!(
            "UPDATE mentors SET name = ?2, email = ?3, department = ?4
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.department)
            .fetch_optional(pool)
            .await
    }

    /// Delete a mentor by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while interns still reference it.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mentors WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
