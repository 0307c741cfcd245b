//! strftime-style timestamps for the `{timestamp}` placeholder.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};
use thiserror::Error;

/// Default time format: compact local date and time.
pub const DEFAULT_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("invalid or unsupported strftime format code in '{0}'")]
    BadSpecifier(String),
    #[error("'{0}' contains no format codes")]
    NoSpecifier(String),
}

/// Checks that `fmt` is a usable strftime format: every `%` code is known
/// and at least one code is present.
pub fn validate_time_format(fmt: &str) -> Result<(), TimeFormatError> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(TimeFormatError::BadSpecifier(fmt.to_string()));
    }
    let sample = format_timestamp(&Local::now(), fmt)?;
    if sample == fmt {
        return Err(TimeFormatError::NoSpecifier(fmt.to_string()));
    }
    Ok(())
}

/// Formats `at` with `fmt`, reporting bad format strings instead of panicking.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, fmt: &str) -> Result<String, TimeFormatError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    write!(out, "{}", at.format(fmt)).map_err(|_| TimeFormatError::BadSpecifier(fmt.to_string()))?;
    Ok(out)
}
