//! Timestamp formatting for the views.

use crate::types::ValidationError;
use chrono::format::{Item, StrftimeItems};
use chrono::DateTime;
use std::fmt::Write;

/// Checks a strftime pattern up front; chrono only reports bad patterns at render time.
pub fn validate_date_format(format: &str) -> Result<(), ValidationError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ValidationError::InvalidDateFormat(format.to_string()));
    }
    Ok(())
}

/// Formats an ISO-8601 timestamp for display; empty if missing or unparseable.
pub fn format_timestamp(timestamp: Option<&str>, format: &str) -> String {
    let Some(parsed) = timestamp.and_then(|ts| DateTime::parse_from_rfc3339(ts).ok()) else {
        return String::new();
    };

    let mut out = String::new();
    if write!(out, "{}", parsed.format(format)).is_err() {
        log::warn!("Date format '{}' could not be applied", format);
        return String::new();
    }
    out
}
