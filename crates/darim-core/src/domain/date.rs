//! Calendar date handling.
//!
//! The editor works on plain `YYYY-MM-DD` strings while the server stores a
//! full timestamp. A date picked by the user is anchored at midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DateError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a date or datetime string and keep only the calendar day.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    parse_datetime(raw).map(|dt| dt.date())
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.f]` or RFC 3339.
///
/// A bare date becomes midnight of that day. RFC 3339 input keeps the wall
/// clock time it was written with, so the calendar day never shifts.
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, DateError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DateError::Empty);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(midnight(date));
    }
    if let Ok(datetime) = raw.parse::<NaiveDateTime>() {
        return Ok(datetime);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.naive_local());
    }

    Err(DateError::Invalid(raw.to_string()))
}

pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}
