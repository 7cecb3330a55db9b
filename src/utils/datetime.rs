//! Date and time utility functions
//!
//! This module resolves the free-text date and time tokens typed into the
//! input form into a due timestamp, and formats timestamps for display.
//! Everything is naive local time; no timezone handling takes place.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Timelike};
use std::fmt::Write;

use crate::constants::{
    DATE_TOKEN_LEN, DEFAULT_DUE_FORMAT, DEFAULT_HEADER_DATE_FORMAT, DUE_YEAR_BASE, TIME_TOKEN_LEN,
};

/// Parse an `HHMM` time token.
///
/// # Returns
/// * `Some((hour, minute))` when the token is exactly four ASCII digits with
///   `hour < 24` and `minute < 60`
/// * `None` otherwise
pub fn parse_time_token(token: &str) -> Option<(u32, u32)> {
    let digits = fixed_digits(token.trim(), TIME_TOKEN_LEN)?;
    let hour = digits[0] * 10 + digits[1];
    let minute = digits[2] * 10 + digits[3];

    if hour < 24 && minute < 60 {
        Some((hour, minute))
    } else {
        None
    }
}

/// Parse a `DDMMYY` date token into `(year, month, day)`.
///
/// The two-digit year is offset by 2000. The result is not checked against
/// the calendar; `resolve_due` does that when combining date and time.
pub fn parse_date_token(token: &str) -> Option<(i32, u32, u32)> {
    let digits = fixed_digits(token.trim(), DATE_TOKEN_LEN)?;
    let day = digits[0] * 10 + digits[1];
    let month = digits[2] * 10 + digits[3];
    let year = DUE_YEAR_BASE + (digits[4] * 10 + digits[5]) as i32;

    Some((year, month, day))
}

/// Resolve the due timestamp of a new task.
///
/// # Arguments
/// * `date_token` - Optional `DDMMYY` token, falls back to the date of `now`
/// * `time_token` - Optional `HHMM` token, falls back to the time of `now`
/// * `now` - Current local time
///
/// # Returns
/// The combined timestamp, or `now + 24h` when the date does not exist in the
/// calendar (e.g. the 31st of April).
pub fn resolve_due(date_token: &str, time_token: &str, now: NaiveDateTime) -> NaiveDateTime {
    let now = now.trunc_subsecs(0);

    let time = match parse_time_token(time_token) {
        Some((hour, minute)) => NaiveTime::from_hms_opt(hour, minute, 0),
        None => NaiveTime::from_hms_opt(now.hour(), now.minute(), now.second()),
    };

    let date = match parse_date_token(date_token) {
        Some((year, month, day)) => NaiveDate::from_ymd_opt(year, month, day),
        None => Some(now.date()),
    };

    match (date, time) {
        (Some(date), Some(time)) => date.and_time(time),
        _ => now + Duration::days(1),
    }
}

/// Render a due timestamp with `due_format`.
///
/// # Returns
/// * `None` when the format asks for something a naive timestamp does not
///   carry, such as `%z`
pub fn try_format_due(due_at: NaiveDateTime, due_format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", due_at.format(due_format)).ok()?;
    Some(out)
}

/// Render a calendar date with `header_format`; `None` when the format needs
/// a time of day or an offset
pub fn try_format_header_date(date: NaiveDate, header_format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(header_format)).ok()?;
    Some(out)
}

/// Format a due timestamp, e.g. `15/10/26 14:30` with the default format.
///
/// Falls back to the default format when `due_format` cannot render.
pub fn format_due(due_at: NaiveDateTime, due_format: &str) -> String {
    try_format_due(due_at, due_format)
        .or_else(|| try_format_due(due_at, DEFAULT_DUE_FORMAT))
        .unwrap_or_default()
}

/// Format the header date, e.g. `Thursday, 15 October 2026`
pub fn format_header_date(date: NaiveDate, header_format: &str) -> String {
    try_format_header_date(date, header_format)
        .or_else(|| try_format_header_date(date, DEFAULT_HEADER_DATE_FORMAT))
        .unwrap_or_default()
}

/// Split a token into its decimal digits if it is exactly `len` ASCII digits.
fn fixed_digits(token: &str, len: usize) -> Option<Vec<u32>> {
    if token.len() != len || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.bytes().map(|b| u32::from(b - b'0')).collect())
}
