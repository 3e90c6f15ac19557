//! Session token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. The signing
//! secret is loaded once at startup into [`JwtConfig`] and handed to every
//! call explicitly.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use slotwise_core::types::DbId;

use crate::config::{parse_var, ConfigError};

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the account's internal database id.
    pub sub: DbId,
    /// The account's email at issuance.
    pub email: String,
    /// Issuer; must match [`JwtConfig::issuer`] on verification.
    pub iss: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for token generation and validation.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Value written to and required in the `iss` claim.
    pub issuer: String,
    /// Token lifetime in hours.
    pub expiry_hours: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("expiry_hours", &self.expiry_hours)
            .finish()
    }
}

/// Default issuer claim.
pub const DEFAULT_ISSUER: &str = "slotwise";
/// Default token lifetime in hours.
pub const DEFAULT_EXPIRY_HOURS: i64 = 24;
/// Longest accepted token lifetime in hours (one year).
pub const MAX_EXPIRY_HOURS: i64 = 24 * 365;

impl JwtConfig {
    /// Load JWT configuration through `lookup`.
    ///
    /// | Env Var            | Required | Default    |
    /// |--------------------|----------|------------|
    /// | `JWT_SECRET`       | **yes**  | --         |
    /// | `JWT_ISSUER`       | no       | `slotwise` |
    /// | `JWT_EXPIRY_HOURS` | no       | `24`       |
    ///
    /// The lifetime must lie in `1..=MAX_EXPIRY_HOURS`.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string());

        let expiry_hours: i64 = parse_var(lookup, "JWT_EXPIRY_HOURS", DEFAULT_EXPIRY_HOURS)?;
        if !(1..=MAX_EXPIRY_HOURS).contains(&expiry_hours) {
            return Err(ConfigError::Invalid {
                var: "JWT_EXPIRY_HOURS",
                value: expiry_hours.to_string(),
                reason: format!("must be between 1 and {MAX_EXPIRY_HOURS}"),
            });
        }

        Ok(Self {
            secret,
            issuer,
            expiry_hours,
        })
    }
}

/// Issue a session token for the given account.
///
/// The token expires exactly `expiry_hours` after issuance.
pub fn generate_token(
    account_id: DbId,
    email: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: account_id,
        email: email.to_string(),
        iss: config.issuer.clone(),
        iat: now,
        exp: now.saturating_add(config.expiry_hours.saturating_mul(3600)),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
///
/// Signature, expiry (no leeway) and issuer are all checked.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_issuer(&[config.issuer.as_str()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
