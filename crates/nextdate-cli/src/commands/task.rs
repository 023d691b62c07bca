//! `nextdate resolve` and `nextdate done`.

use chrono::NaiveDate;
use serde::Serialize;

use nextdate_core::{Completion, complete_task, format_date, resolve_task_date};

use super::Report;
use crate::config::OutputSettings;
use crate::error::ClientResult;

/// Date a submitted task should carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    pub date: String,
}

impl Report for ResolveReport {
    fn text(&self, _settings: &OutputSettings) -> String {
        self.date.clone()
    }
}

/// What completing a task does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DoneAction {
    Remove,
    Reschedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoneReport {
    pub action: DoneAction,
    /// New `YYYYMMDD` date when rescheduled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl From<Completion> for DoneReport {
    fn from(completion: Completion) -> Self {
        match completion {
            Completion::Remove => Self {
                action: DoneAction::Remove,
                date: None,
            },
            Completion::Reschedule(next) => Self {
                action: DoneAction::Reschedule,
                date: Some(format_date(next)),
            },
        }
    }
}

impl Report for DoneReport {
    fn text(&self, _settings: &OutputSettings) -> String {
        match (&self.action, &self.date) {
            (DoneAction::Reschedule, Some(date)) => format!("reschedule {date}"),
            _ => "remove".to_string(),
        }
    }
}

/// Resolves a task date against `today`.
pub fn resolve(today: NaiveDate, date: &str, repeat: &str) -> ClientResult<ResolveReport> {
    let resolved = resolve_task_date(today, date, repeat)?;
    Ok(ResolveReport {
        date: format_date(resolved),
    })
}

/// Completes a task on `today`.
pub fn done(today: NaiveDate, date: &str, repeat: &str) -> ClientResult<DoneReport> {
    Ok(complete_task(today, date, repeat)?.into())
}
