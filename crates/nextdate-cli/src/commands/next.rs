//! `nextdate next`.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use nextdate_core::{format_date, next_date_str};

use super::Report;
use crate::config::OutputSettings;
use crate::error::ClientResult;

/// Next occurrence of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextReport {
    /// `YYYYMMDD`, absent when the rule does not recur.
    pub next_date: Option<String>,
}

impl Report for NextReport {
    fn text(&self, settings: &OutputSettings) -> String {
        self.next_date
            .clone()
            .unwrap_or_else(|| settings.no_repeat_text.clone())
    }
}

/// Computes the next date; `now` defaults to `today`.
pub fn run(
    now: Option<&str>,
    date: &str,
    repeat: &str,
    today: NaiveDate,
) -> ClientResult<NextReport> {
    let now = match now {
        Some(now) => now.to_string(),
        None => format_date(today),
    };
    debug!(%now, date, repeat, "Computing next date");
    let next = next_date_str(&now, date, repeat)?;
    Ok(NextReport {
        next_date: (!next.is_empty()).then_some(next),
    })
}
