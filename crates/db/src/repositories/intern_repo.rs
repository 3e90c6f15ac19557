//! Repository for the `interns` table.

use sqlx::SqlitePool;
use slotwise_core::types::{DbId, DEFAULT_INTERN_STATUS};

use crate::models::intern::{CreateIntern, Intern, InternWithMentor, UpdateIntern};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, status, mentor_id";

/// Provides CRUD operations for interns.
pub struct InternRepo;

impl InternRepo {
    /// Insert a new intern, returning the created row.
    ///
    /// Fails with a foreign key violation if `mentor_id` does not exist.
    pub async fn create(pool: &SqlitePool, input: &CreateIntern) -> Result<Intern, sqlx::Error> {
        let query = format!(
            "INSERT INTO interns (name, email, mentor_id)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Intern>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.mentor_id)
            .fetch_one(pool)
            .await
    }

    /// Find an intern by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Intern>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interns WHERE id = ?1");
        sqlx::query_as::<_, Intern>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all interns with their mentor's name and email, in insertion order.
    pub async fn list_with_mentor(pool: &SqlitePool) -> Result<Vec<InternWithMentor>, sqlx::Error> {
        sqlx::query_as::<_, InternWithMentor>(
            "SELECT i.id, i.name, i.email, i.status, i.mentor_id,
                    m.name AS mentor_name, m.email AS mentor_email
             FROM interns AS i
             LEFT JOIN mentors AS m ON m.id = i.mentor_id
             ORDER BY i.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Replace every column of an intern. A missing status resets to the default.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateIntern,
    ) -> Result<Option<Intern>, sqlx::Error> {
        let query = format!(
            "UPDATE interns SET name = ?2, email = ?3, mentor_id = ?4, status = ?5
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Intern>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.mentor_id)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_INTERN_STATUS))
            .fetch_optional(pool)
            .await
    }

    /// Delete an intern by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while assignments still reference it.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM interns WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
