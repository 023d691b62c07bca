//! Next-occurrence calculation.
//!
//! [`next_date`] turns a parsed [`RecurrenceRule`] into a [`Cadence`] (the
//! rule with its parameters validated) and steps from the anchor date to the
//! first occurrence after the reference date.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::date::{self, add_days, add_years, days_until, weekday_from_iso};
use crate::error::{DateField, Error, Result};
use crate::rule::{ParamGroups, RecurrenceRule};

/// Largest accepted interval for a daily rule.
pub const MAX_DAILY_INTERVAL: i64 = 400;

/// A recurrence with validated parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cadence {
    /// Same month and day every year.
    Yearly,
    /// Every `n` days, `1..=400`.
    Daily(u32),
    /// On the given weekdays, sorted Monday first, without duplicates.
    ///
    /// Serialized as ISO numbers, the same way rule text lists them.
    Weekly(#[serde(serialize_with = "iso_weekdays")] Vec<Weekday>),
}

fn iso_weekdays<S: Serializer>(
    days: &[Weekday],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(days.iter().map(Weekday::number_from_monday))
}

impl Cadence {
    /// Validates the parameters of `rule`.
    ///
    /// Returns `Ok(None)` for [`RecurrenceRule::None`].
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedRule`] for monthly rules.
    /// - [`Error::InvalidParameters`] when the parameter groups do not fit the
    ///   kind.
    pub fn from_rule(rule: &RecurrenceRule) -> Result<Option<Self>> {
        match rule {
            RecurrenceRule::None => Ok(None),
            RecurrenceRule::Yearly => Ok(Some(Self::Yearly)),
            RecurrenceRule::Monthly(_) => Err(Error::unsupported(
                "month-based recurrence not supported",
            )),
            RecurrenceRule::Daily(params) => Ok(Some(Self::Daily(daily_interval(params)?))),
            RecurrenceRule::Weekly(params) => Ok(Some(Self::Weekly(weekdays(params)?))),
        }
    }

    /// Computes the next occurrence for this cadence.
    pub fn next_after(&self, reference: NaiveDate, anchor: NaiveDate) -> Result<NaiveDate> {
        match self {
            Self::Yearly => next_yearly(reference, anchor),
            Self::Daily(step) => next_daily(reference, anchor, *step),
            Self::Weekly(days) => next_weekly(reference, anchor, days),
        }
    }
}

/// Computes the next occurrence of `rule` relative to `reference`.
///
/// Returns `Ok(None)` when the rule is [`RecurrenceRule::None`]; callers
/// decide what a non-recurring task resolves to.
///
/// - Yearly: the anchor moved forward by the year difference, or by one year
///   when the anchor's year is not before the reference's.
/// - Daily: the anchor plus `n` when the reference is earlier, the reference
///   itself when both are equal, else the first multiple of `n` days from the
///   anchor that is past the reference.
/// - Weekly: the nearest listed weekday strictly after the later of the two
///   dates.
///
/// # Errors
///
/// See [`Cadence::from_rule`]; arithmetic leaving the calendar range yields
/// [`Error::DateOutOfRange`].
pub fn next_date(
    reference: NaiveDate,
    anchor: NaiveDate,
    rule: &RecurrenceRule,
) -> Result<Option<NaiveDate>> {
    let Some(cadence) = Cadence::from_rule(rule)? else {
        debug!("Rule does not recur");
        return Ok(None);
    };
    let next = cadence.next_after(reference, anchor)?;
    debug!(%reference, %anchor, %rule, %next, "Computed next occurrence");
    Ok(Some(next))
}

/// String boundary over [`next_date`].
///
/// `now` and `date` are `YYYYMMDD` literals, `repeat` is rule text. The
/// result is a `YYYYMMDD` literal, or an empty string when the rule does not
/// recur.
///
/// # Errors
///
/// [`Error::DateFormat`] for a bad literal (the anchor is checked first),
/// then any error from [`crate::rule::parse`] or [`next_date`]. A next date
/// past year 9999 has no literal and yields [`Error::DateOutOfRange`].
pub fn next_date_str(now: &str, date: &str, repeat: &str) -> Result<String> {
    let anchor = date::parse_date(DateField::Anchor, date)?;
    let reference = date::parse_date(DateField::Reference, now)?;
    let rule = RecurrenceRule::parse(repeat)?;
    Ok(next_date(reference, anchor, &rule)?
        .map(date::format_date)
        .unwrap_or_default())
}

fn daily_interval(params: &ParamGroups) -> Result<u32> {
    let [group] = params.as_slice() else {
        return Err(Error::invalid(format!(
            "daily rule takes exactly one interval, got {} parameter groups",
            params.len()
        )));
    };
    let [step] = group.as_slice() else {
        return Err(Error::invalid(format!(
            "daily rule takes exactly one interval, got {} values",
            group.len()
        )));
    };
    if !(1..=MAX_DAILY_INTERVAL).contains(step) {
        return Err(Error::invalid(format!(
            "daily interval must be between 1 and {MAX_DAILY_INTERVAL}, got {step}"
        )));
    }
    u32::try_from(*step).map_err(|_| Error::invalid(format!("daily interval {step} out of range")))
}

fn weekdays(params: &ParamGroups) -> Result<Vec<Weekday>> {
    let [group] = params.as_slice() else {
        return Err(Error::invalid(format!(
            "weekly rule takes exactly one weekday list, got {} parameter groups",
            params.len()
        )));
    };
    if group.is_empty() {
        return Err(Error::invalid("weekly rule needs at least one weekday"));
    }

    let mut days = group
        .iter()
        .map(|&number| {
            weekday_from_iso(number).ok_or_else(|| {
                Error::invalid(format!("weekday must be between 1 and 7, got {number}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    days.sort_by_key(Weekday::number_from_monday);
    days.dedup();
    Ok(days)
}

fn next_yearly(reference: NaiveDate, anchor: NaiveDate) -> Result<NaiveDate> {
    let diff = reference.year() - anchor.year();
    let years = if diff > 0 { diff } else { 1 };
    debug!(diff, years, "Yearly step");
    add_years(anchor, years)
}

fn next_daily(reference: NaiveDate, anchor: NaiveDate, step: u32) -> Result<NaiveDate> {
    let step = u64::from(step);
    match reference.cmp(&anchor) {
        Ordering::Less => add_days(anchor, step),
        Ordering::Equal => Ok(reference),
        Ordering::Greater => {
            let elapsed = u64::try_from((reference - anchor).num_days())
                .map_err(|_| Error::DateOutOfRange)?;
            let cycles = elapsed / step + 1;
            debug!(elapsed, step, cycles, "Daily step");
            let offset = step.checked_mul(cycles).ok_or(Error::DateOutOfRange)?;
            add_days(anchor, offset)
        }
    }
}

fn next_weekly(reference: NaiveDate, anchor: NaiveDate, days: &[Weekday]) -> Result<NaiveDate> {
    let base = reference.max(anchor);
    let from = base.weekday();
    let mut nearest = 7;
    for &day in days {
        let distance = days_until(from, day);
        trace!(?from, ?day, distance, "Weekday distance");
        nearest = nearest.min(distance);
    }
    add_days(base, u64::from(nearest))
}
