//! Task date policies built on the calculator.
//!
//! These decide which date a task should carry when it is submitted and what
//! happens when it is marked done. They are pure functions of the current
//! date, the task's date literal and its rule text.

use chrono::NaiveDate;
use tracing::debug;

use crate::calc::{Cadence, next_date};
use crate::date::{add_days, parse_date};
use crate::error::{DateField, Result};
use crate::rule::RecurrenceRule;

/// Outcome of completing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The task does not recur and is finished.
    Remove,
    /// The task moves to its next occurrence.
    Reschedule(NaiveDate),
}

/// Resolves the date a submitted task should be stored with.
///
/// An empty date means `today`. A date earlier than `today` is brought
/// forward: to `today` when the task does not recur, otherwise to its next
/// occurrence. Any other date is kept. The rule is validated even when the
/// date is kept.
///
/// # Errors
///
/// Rule and date errors from [`parse_date`], [`RecurrenceRule::parse`] and
/// [`next_date`].
pub fn resolve_task_date(today: NaiveDate, date: &str, repeat: &str) -> Result<NaiveDate> {
    let rule = RecurrenceRule::parse(repeat)?;
    Cadence::from_rule(&rule)?;

    if date.trim().is_empty() {
        debug!(%today, "Task has no date, using today");
        return Ok(today);
    }

    let anchor = parse_date(DateField::Anchor, date)?;
    if anchor >= today {
        return Ok(anchor);
    }

    let resolved = next_date(today, anchor, &rule)?.unwrap_or(today);
    debug!(%anchor, %resolved, %rule, "Moved past task date forward");
    Ok(resolved)
}

/// Decides what completing a task does.
///
/// A task without a rule is removed. A recurring task is rescheduled to its
/// next occurrence with tomorrow as the reference date, so the new date is
/// never today (a daily task due today skips to the day after tomorrow).
///
/// # Errors
///
/// Rule and date errors from [`parse_date`], [`RecurrenceRule::parse`] and
/// [`next_date`].
pub fn complete_task(today: NaiveDate, date: &str, repeat: &str) -> Result<Completion> {
    let rule = RecurrenceRule::parse(repeat)?;
    if rule.is_none() {
        return Ok(Completion::Remove);
    }

    let anchor = parse_date(DateField::Anchor, date)?;
    let reference = add_days(today, 1)?;
    Ok(match next_date(reference, anchor, &rule)? {
        Some(next) => Completion::Reschedule(next),
        None => Completion::Remove,
    })
}
