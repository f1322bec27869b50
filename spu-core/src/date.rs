//! Parsing of the `MM-DD-YY` dates used in the config file.

use chrono::{Datelike, NaiveDate};

use crate::error::{SpuError, SpuResult};

/// Format of every date in the config file. Single-digit months and days
/// (`01-7-19`) are accepted.
pub const DATE_FORMAT: &str = "%m-%d-%y";

/// Parse a `MM-DD-YY` date.
pub fn parse_date(value: &str) -> SpuResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| SpuError::InvalidDate {
        value: value.to_string(),
        reason: format!("{} (expected MM-DD-YY)", e),
    })
}

/// Two-digit operational year of a date (`2019-03-01` -> `19`).
pub fn operational_year(date: NaiveDate) -> i32 {
    date.year() - 2000
}
