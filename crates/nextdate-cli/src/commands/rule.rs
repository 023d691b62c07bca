//! `nextdate parse`.

use serde::Serialize;

use nextdate_core::{Cadence, RecurrenceRule, RuleKind};

use super::Report;
use crate::config::OutputSettings;
use crate::error::ClientResult;

/// A parsed and validated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    /// Canonical rule text.
    pub rule: String,
    pub kind: RuleKind,
    /// Validated parameters, absent for a rule that does not recur.
    pub cadence: Option<Cadence>,
}

impl Report for RuleReport {
    fn text(&self, _settings: &OutputSettings) -> String {
        if self.rule.is_empty() {
            self.kind.display_name().to_string()
        } else {
            format!("{} ({})", self.rule, self.kind.display_name())
        }
    }
}

/// Parses `text` and checks its parameters.
pub fn run(text: &str) -> ClientResult<RuleReport> {
    let rule = RecurrenceRule::parse(text)?;
    let cadence = Cadence::from_rule(&rule)?;
    Ok(RuleReport {
        rule: rule.to_string(),
        kind: rule.kind(),
        cadence,
    })
}
