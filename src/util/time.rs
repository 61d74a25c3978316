//! Calendar-date helpers for StayScout.
//!
//! Provides consistent date parsing and display across the entire UI.
//! Display formatting is localized to pt-BR to match the product's
//! Brazilian-Portuguese surface.

use chrono::{Local, Locale, NaiveDate};

use crate::util::constants;
use crate::util::error::{Result, StayScoutError};

/// Today's date in the local timezone.
///
/// All date-range constraints ("check-in must not be in the past") are
/// evaluated against local calendar days, not UTC instants.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The earliest check-out permitted for the given check-in.
pub fn min_check_out(check_in: NaiveDate) -> NaiveDate {
    check_in + chrono::Duration::days(constants::MIN_NIGHTS)
}

/// Format a date for display in the filter panel's range summary,
/// e.g. `12 ago 2026`.
pub fn format_picker_date(date: NaiveDate) -> String {
    date.format_localized("%d %b %Y", Locale::pt_BR).to_string()
}

/// Encode a date for the query mapping as an ISO-8601 calendar date,
/// e.g. `2026-08-12`.
pub fn encode_query_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date value from a query mapping.
///
/// Accepts an ISO-8601 calendar date (`2026-08-12`). Full RFC 3339 instants
/// (`2026-08-12T14:00:00.000Z`) are also accepted by reading their leading
/// date component, so values produced by older clients still seed the panel.
pub fn parse_query_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    // A datetime instant: keep the calendar-date prefix.
    let date_part = match input.find('T') {
        Some(idx) => &input[..idx],
        None => input,
    };

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|source| StayScoutError::DateParse {
        input: input.to_owned(),
        source,
    })
}

/// Number of nights between two dates, clamped to zero for inverted pairs.
///
/// Shown in the filter panel's range summary.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().max(0)
}
