pub mod assignment;
pub mod auth;
pub mod intern;
pub mod mentor;
pub mod project;
