//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated account from a Bearer token.

pub mod auth;
