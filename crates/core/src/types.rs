/// All primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT` rowids.
pub type DbId = i64;

/// Status assigned to an intern when none is supplied.
pub const DEFAULT_INTERN_STATUS: &str = "active";

/// Status assigned to a project when none is supplied.
pub const DEFAULT_PROJECT_STATUS: &str = "ongoing";

