//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod account_repo;
pub mod assignment_repo;
pub mod intern_repo;
pub mod mentor_repo;
pub mod project_repo;

pub use account_repo::AccountRepo;
pub use assignment_repo::AssignmentRepo;
pub use intern_repo::InternRepo;
pub use mentor_repo::MentorRepo;
pub use project_repo::ProjectRepo;
