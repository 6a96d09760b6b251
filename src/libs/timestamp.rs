//! Raw text to timestamp validation.
//!
//! The directory and ledger never see raw input; this collaborator turns
//! prompt answers into validated values first. Parsing is a pure function
//! of the input and the supplied "now", which keeps the rejection rules
//! testable without touching the wall clock.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Input pattern for check-in and check-out timestamps.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Input pattern for report dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("invalid format, expected YYYY-MM-DD HH:MM")]
    Malformed,
    #[error("cannot enter a future date/time")]
    InFuture,
}

/// Validates a prompt answer as an event timestamp.
///
/// Blank input is an explicit "use current time" request. Anything else
/// must match [`DATETIME_FORMAT`] and must not be later than `now`.
pub fn parse_timestamp(raw: &str, now: NaiveDateTime) -> Result<NaiveDateTime, TimestampError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(now);
    }
    let parsed = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT).map_err(|_| TimestampError::Malformed)?;
    if parsed > now {
        return Err(TimestampError::InFuture);
    }
    Ok(parsed)
}

/// Validates a prompt answer as a report date. Blank input and the
/// `today` keyword both resolve to `today`. Report dates may lie in the
/// future; the report is simply empty.
pub fn parse_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, TimestampError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| TimestampError::Malformed)
}
