pub mod account;
pub mod assignment;
pub mod intern;
pub mod mentor;
pub mod project;
