//! Date validators and pt-BR / ISO date conversion

use super::primitive::is_number;
use crate::error::FormatError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout expected by [`date`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DateFormat {
    /// `YYYY-MM-DD`, or any other shape [`is_date`] accepts
    #[default]
    Db,
    /// `DD/MM/YYYY`
    Pt,
}

impl From<&str> for DateFormat {
    /// `"pt"` selects [`DateFormat::Pt`]; every other name falls back to `Db`
    fn from(name: &str) -> Self {
        match name {
            "pt" => DateFormat::Pt,
            _ => DateFormat::Db,
        }
    }
}

impl From<String> for DateFormat {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Db => write!(f, "db"),
            DateFormat::Pt => write!(f, "pt"),
        }
    }
}

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

enum Calendar {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

/// Parse the date shapes this crate understands.
///
/// Offsets (RFC 3339, RFC 2822) are converted to local time.
fn parse_calendar(value: &str) -> Option<Calendar> {
    let value = value.trim();

    for layout in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, layout) {
            return Some(Calendar::Date(date));
        }
    }

    for layout in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(value, layout) {
            return Some(Calendar::DateTime(date_time));
        }
    }

    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .ok()
        .map(|date_time| Calendar::DateTime(date_time.with_timezone(&Local).naive_local()))
}

/// True if `value` is a real calendar date or date-time.
///
/// Accepted: `YYYY-MM-DD`, `DD/MM/YYYY`, `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]`,
/// RFC 3339 and RFC 2822. Impossible days such as `2024-02-30` are rejected.
pub fn is_date(value: &str) -> bool {
    parse_calendar(value).is_some()
}

/// True if `value` is a valid date that is not in the future.
///
/// Date-only input is compared using the current time of day, so today
/// always passes. Input that does not parse is rejected.
pub fn date(value: &str, format: impl Into<DateFormat>) -> bool {
    date_at(value, format, Local::now().naive_local())
}

/// [`date`] against an explicit reference instant
pub fn date_at(value: &str, format: impl Into<DateFormat>, now: NaiveDateTime) -> bool {
    let format = format.into();

    let candidate = match format {
        DateFormat::Pt => {
            let parts: Vec<&str> = value.trim().split('/').collect();
            let [day, month, year] = parts.as_slice() else {
                return false;
            };

            match NaiveDate::parse_from_str(&format!("{year}-{month}-{day}"), "%Y-%m-%d") {
                Ok(date) => date.and_time(now.time()),
                Err(err) => {
                    tracing::debug!(value, error = %err, "pt-BR date does not parse");
                    return false;
                }
            }
        }
        DateFormat::Db => match parse_calendar(value) {
            Some(Calendar::Date(date)) => date.and_time(now.time()),
            Some(Calendar::DateTime(date_time)) => date_time,
            None => {
                tracing::debug!(value, "date does not parse");
                return false;
            }
        },
    };

    candidate <= now
}

/// Convert `DD/MM/YYYY` to `YYYY-MM-DD`.
///
/// Unpadded parts are zero-padded: `1/2/2024` becomes `2024-02-01`.
pub fn format_pt_br_date_to_en(value: &str) -> Result<String, FormatError> {
    if !is_date(value) {
        return Err(FormatError::InvalidDate(value.to_string()));
    }

    let [day, month, year] = date_parts(value, '/')?;
    Ok(format!("{year:04}-{month:02}-{day:02}"))
}

/// Convert `YYYY-MM-DD` to `DD/MM/YYYY`, zero-padding each part
pub fn format_en_date_to_pt_br(value: &str) -> Result<String, FormatError> {
    if !is_date(value) {
        return Err(FormatError::InvalidDate(value.to_string()));
    }

    let [year, month, day] = date_parts(value, '-')?;
    Ok(format!("{day:02}/{month:02}/{year:04}"))
}

/// Exactly three all-digit parts
fn date_parts(value: &str, separator: char) -> Result<[u32; 3], FormatError> {
    let malformed = || FormatError::Malformed(value.to_string());

    let parts: Vec<&str> = value.trim().split(separator).collect();
    let [first, second, third] = parts.as_slice() else {
        return Err(malformed());
    };

    let mut numbers = [0u32; 3];
    for (number, part) in numbers.iter_mut().zip([first, second, third]) {
        if !is_number(part) {
            return Err(malformed());
        }
        *number = part.parse().map_err(|_| malformed())?;
    }

    Ok(numbers)
}
