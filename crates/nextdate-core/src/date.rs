//! Calendar date helpers.
//!
//! Dates travel as 8-digit `YYYYMMDD` literals and are handled internally as
//! [`NaiveDate`]. This module owns the literal format, the calendar
//! arithmetic used by the calculator, and the single mapping between ISO
//! weekday numbers (1 = Monday … 7 = Sunday) and [`Weekday`].

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{DateField, Error, Result};

/// `chrono` format string for the `YYYYMMDD` literal.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Length of a date literal.
const DATE_LEN: usize = 8;

/// Last year a `YYYYMMDD` literal can carry.
pub const MAX_YEAR: i32 = 9999;

/// Parses a `YYYYMMDD` literal, ignoring surrounding whitespace.
///
/// The literal must be exactly eight ASCII digits naming a real date.
/// `field` only tags the error.
pub fn parse_date(field: DateField, value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.len() != DATE_LEN || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::date_format(field, value));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| Error::date_format(field, value))
}

/// Formats a date as a `YYYYMMDD` literal.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Adds whole days, failing when the result has no `YYYYMMDD` literal.
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(Error::DateOutOfRange)
        .and_then(representable)
}

/// Adds whole years keeping month and day.
///
/// A 29 February landing in a common year rolls over to 1 March.
pub fn add_years(date: NaiveDate, years: i32) -> Result<NaiveDate> {
    let year = date.year().checked_add(years).ok_or(Error::DateOutOfRange)?;
    if let Some(shifted) = NaiveDate::from_ymd_opt(year, date.month(), date.day()) {
        return representable(shifted);
    }
    NaiveDate::from_ymd_opt(year, date.month(), 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day() - 1))))
        .ok_or(Error::DateOutOfRange)
        .and_then(representable)
}

fn representable(date: NaiveDate) -> Result<NaiveDate> {
    if (0..=MAX_YEAR).contains(&date.year()) {
        Ok(date)
    } else {
        Err(Error::DateOutOfRange)
    }
}

/// Maps an ISO weekday number to a [`Weekday`].
///
/// Returns `None` outside `1..=7`.
pub fn weekday_from_iso(number: i64) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days to move forward from `from` to reach `to`, in `1..=7`.
///
/// The same weekday is a full week away.
pub fn days_until(from: Weekday, to: Weekday) -> u32 {
    let ahead = (to.number_from_monday() + 7 - from.number_from_monday()) % 7;
    if ahead == 0 { 7 } else { ahead }
}
