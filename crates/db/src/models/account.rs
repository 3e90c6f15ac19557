//! Account entity model and DTOs.

use sqlx::FromRow;
use slotwise_core::types::DbId;

/// Full row from the `accounts` table.
///
/// Carries the password hash -- never serialize this into a response.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// DTO for inserting an account. The password must already be hashed.
#[derive(Debug)]
pub struct CreateAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
