//! Signup and login flows.
//!
//! Both flows end by issuing a session token through [`jwt::generate_token`].
//! Password hashing and verification run on the blocking pool so a burst of
//! logins cannot stall the async workers.

use slotwise_core::error::CoreError;
use slotwise_core::types::DbId;
use slotwise_db::models::account::CreateAccount;
use slotwise_db::repositories::AccountRepo;
use slotwise_db::DbPool;

use crate::auth::jwt::{self, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// An authenticated account and its freshly issued token.
#[derive(Debug)]
pub struct Session {
    pub account_id: DbId,
    pub token: String,
}

/// Create an account and issue its first session token.
///
/// Fails with [`CoreError::Conflict`] when the username or email is already
/// registered; in that case no row is written.
pub async fn register(
    pool: &DbPool,
    jwt_config: &JwtConfig,
    username: &str,
    email: &str,
    password: &str,
) -> AppResult<Session> {
    if AccountRepo::find_by_username(pool, username).await?.is_some() {
        return Err(CoreError::Conflict("Username is already taken".into()).into());
    }
    if AccountRepo::find_by_email(pool, email).await?.is_some() {
        return Err(CoreError::Conflict("Email is already registered".into()).into());
    }

    let password_hash = hash_blocking(password.to_owned()).await?;

    let input = CreateAccount {
        username: username.to_owned(),
        email: email.to_owned(),
        password_hash,
    };
    // A concurrent signup can still win the race between the checks above
    // and this insert; the unique index is the final arbiter.
    let account = AccountRepo::create(pool, &input).await.map_err(|e| {
        if slotwise_db::is_unique_violation(&e) {
            AppError::Core(CoreError::Conflict(
                "Username or email is already registered".into(),
            ))
        } else {
            AppError::Database(e)
        }
    })?;

    let token = issue(account.id, &account.email, jwt_config)?;
    tracing::info!(account_id = account.id, "Account registered");

    Ok(Session {
        account_id: account.id,
        token,
    })
}

/// Check an email/password pair and issue a session token.
///
/// Fails with [`CoreError::NotFound`] when no account has the email and with
/// [`CoreError::InvalidCredentials`] when the password does not match.
pub async fn authenticate(
    pool: &DbPool,
    jwt_config: &JwtConfig,
    email: &str,
    password: &str,
) -> AppResult<Session> {
    let account = AccountRepo::find_by_email(pool, email)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Account",
            lookup: "the given email".into(),
        })?;

    let matches = verify_blocking(password.to_owned(), account.password_hash.clone()).await?;
    if !matches {
        tracing::warn!(account_id = account.id, "Login rejected: wrong password");
        return Err(CoreError::InvalidCredentials.into());
    }

    let token = issue(account.id, &account.email, jwt_config)?;
    tracing::info!(account_id = account.id, "Account logged in");

    Ok(Session {
        account_id: account.id,
        token,
    })
}

fn issue(account_id: DbId, email: &str, jwt_config: &JwtConfig) -> Result<String, CoreError> {
    jwt::generate_token(account_id, email, jwt_config)
        .map_err(|e| CoreError::Internal(format!("Token generation error: {e}")))
}

async fn hash_blocking(password: String) -> Result<String, CoreError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| CoreError::Internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| CoreError::Internal(format!("Password hashing error: {e}")))
}

/// A stored hash that fails to parse is an internal error, not a mismatch.
async fn verify_blocking(password: String, hash: String) -> Result<bool, CoreError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| CoreError::Internal(format!("Password verification task failed: {e}")))?
        .map_err(|e| CoreError::Internal(format!("Password verification error: {e}")))
}
