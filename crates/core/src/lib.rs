//! Domain primitives shared by the store and the HTTP service.
//!
//! - [`error`] -- the domain error taxonomy.
//! - [`types`] -- id alias and column defaults.
//! - [`validation`] -- checks that cannot be expressed as field attributes.

pub mod error;
pub mod types;
pub mod validation;
