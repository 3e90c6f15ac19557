//! Credential and session primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed session token issuance and verification.
//! - [`service`] -- signup and login flows built on the two above.

pub mod jwt;
pub mod password;
pub mod service;
