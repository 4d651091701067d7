//! Release date parsing and display formatting

use chrono::{DateTime, NaiveDate, Utc};

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse the date forms that reach the UI: RFC 3339 timestamps from the
/// catalog, bare `YYYY-MM-DD` dates, and the server's `M/D/YYYY` output.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%m/%d/%Y"))
        .ok()
}

/// Short numeric form (`1/1/2023`) used in search responses.
pub fn format_short(input: &str) -> String {
    match parse_date(input) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Long form (`January 1, 2023`) shown next to "Released:".
pub fn format_long(input: Option<&str>) -> String {
    let Some(input) = input.filter(|s| !s.trim().is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    match parse_date(input) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
