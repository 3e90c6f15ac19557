//! Cross-field checks.
//!
//! Single-field rules (non-empty, email shape, numeric range) are declared on
//! the DTOs with `validator` attributes; what lives here needs two fields.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Reject a date range whose end precedes its start.
///
/// Open-ended ranges (either side missing) are accepted.
pub fn check_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), CoreError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(CoreError::Validation(format!(
            "end_date {end} is before start_date {start}"
        ))),
        _ => Ok(()),
    }
}
