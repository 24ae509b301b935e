//! Date and datetime parsing for booking input.
//!
//! The boundary receives dates as `YYYY-MM-DD` and departure times as
//! `YYYY-MM-DDTHH:MM` strings. These helpers turn them into chrono values
//! with errors that echo the offending input.

use chrono::{NaiveDate, NaiveDateTime};

/// Error returned when parsing an invalid date or datetime string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Input did not match `YYYY-MM-DD`
    #[error("invalid date {input:?}: expected format like 1990-01-15")]
    BadDate { input: String },

    /// Input did not match `YYYY-MM-DDTHH:MM`
    #[error("invalid datetime {input:?}: expected format like 2026-03-05T12:30")]
    BadDateTime { input: String },
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeError::BadDate {
        input: s.to_string(),
    })
}

/// Parse a wall-clock datetime in `YYYY-MM-DDTHH:MM` form.
///
/// A trailing seconds component is accepted and kept.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, TimeError> {
    let trimmed = s.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map_err(|_| TimeError::BadDateTime {
            input: s.to_string(),
        })
}
