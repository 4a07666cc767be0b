//! Timestamp rendering

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};

use crate::error::{FintrackError, FintrackResult};

/// Format used when no date format is configured
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reject strftime strings chrono cannot render
pub fn validate_date_format(format: &str) -> FintrackResult<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(FintrackError::Config(format!(
            "Invalid date format: {}",
            format
        )));
    }
    Ok(())
}

/// Render a timestamp with a strftime-style format.
///
/// An unrenderable format falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(format)).is_err() {
        tracing::warn!(format, "invalid date format, using default");
        return timestamp.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}
