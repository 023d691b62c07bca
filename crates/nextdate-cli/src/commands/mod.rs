//! Command implementations.
//!
//! Each command returns a report; `main` renders it as text or JSON.

pub mod config;
pub mod next;
pub mod rule;
pub mod task;

use chrono::NaiveDate;
use serde::Serialize;

use nextdate_core::{DateField, parse_date};

use crate::config::OutputSettings;
use crate::error::ClientResult;

/// Result of a command, renderable as text or JSON.
pub trait Report: Serialize {
    /// Plain-text rendering.
    fn text(&self, settings: &OutputSettings) -> String;
}

/// Renders a report in the requested mode.
pub fn render<R: Report>(
    report: &R,
    json: bool,
    settings: &OutputSettings,
) -> ClientResult<String> {
    if json {
        Ok(serde_json::to_string(report)?)
    } else {
        Ok(report.text(settings))
    }
}

/// Parses an optional `--today` flag, falling back to `today`.
pub(crate) fn date_or(value: Option<&str>, today: NaiveDate) -> ClientResult<NaiveDate> {
    match value {
        Some(value) => Ok(parse_date(DateField::Reference, value)?),
        None => Ok(today),
    }
}
