//! Recurrence rule parsing.
//!
//! A rule is a short text such as `d 7`, `w 1,3,5` or `y`. The first token is
//! the kind marker; the remaining space-separated tokens are positional
//! parameter groups, each either a single integer or a comma-separated list.
//! Parsing only checks syntax; bounds are enforced by the calculator when it
//! turns a rule into a [`Cadence`](crate::calc::Cadence).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// The kind of a recurrence rule, identified by its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Empty rule text: the task does not recur.
    None,
    Yearly,
    /// Recognized but not implemented.
    Monthly,
    Daily,
    Weekly,
}

impl RuleKind {
    /// Looks up the kind for a marker token.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "y" => Some(Self::Yearly),
            "m" => Some(Self::Monthly),
            "d" => Some(Self::Daily),
            "w" => Some(Self::Weekly),
            _ => None,
        }
    }

    /// Returns the marker token, empty for [`RuleKind::None`].
    pub fn marker(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Yearly => "y",
            Self::Monthly => "m",
            Self::Daily => "d",
            Self::Weekly => "w",
        }
    }

    /// Returns a human-readable name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "no recurrence",
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

/// Positional parameter groups of a rule, exactly as written.
///
/// Group `i` holds the integers of parameter token `i`. Values are kept in
/// input order, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamGroups(Vec<Vec<i64>>);

impl ParamGroups {
    /// Creates groups from raw values.
    pub fn new(groups: Vec<Vec<i64>>) -> Self {
        Self(groups)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Vec<i64>] {
        &self.0
    }

    /// Appends `values` to group `index`, creating groups up to it as needed.
    ///
    /// An existing group is extended, never replaced.
    pub fn extend_at(&mut self, index: usize, values: impl IntoIterator<Item = i64>) {
        if self.0.len() <= index {
            self.0.resize_with(index + 1, Vec::new);
        }
        self.0[index].extend(values);
    }
}

impl fmt::Display for ParamGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for (j, value) in group.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

/// A parsed recurrence rule.
///
/// Only the kinds that take parameters carry them; a yearly rule or the
/// absence of a rule cannot hold any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// The task does not recur.
    #[default]
    None,
    /// Same month and day every year.
    Yearly,
    /// Reserved marker; every calculation with it fails.
    Monthly(ParamGroups),
    /// Every `n` days from the anchor.
    Daily(ParamGroups),
    /// On the listed ISO weekdays.
    Weekly(ParamGroups),
}

impl RecurrenceRule {
    /// Parses rule text. See [`parse`].
    pub fn parse(text: &str) -> Result<Self> {
        parse(text)
    }

    /// Returns the kind of this rule.
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::None => RuleKind::None,
            Self::Yearly => RuleKind::Yearly,
            Self::Monthly(_) => RuleKind::Monthly,
            Self::Daily(_) => RuleKind::Daily,
            Self::Weekly(_) => RuleKind::Weekly,
        }
    }

    /// Returns `true` if this rule means "does not recur".
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the parameter groups, if this kind carries any.
    pub fn params(&self) -> Option<&ParamGroups> {
        match self {
            Self::Monthly(p) | Self::Daily(p) | Self::Weekly(p) => Some(p),
            Self::None | Self::Yearly => None,
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().marker())?;
        match self.params() {
            Some(params) if !params.is_empty() => write!(f, " {params}"),
            _ => Ok(()),
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Parses recurrence rule text.
///
/// Surrounding whitespace is ignored and empty text yields
/// [`RecurrenceRule::None`]. Tokens are separated by single spaces, so a
/// doubled space produces an empty, malformed token.
///
/// # Errors
///
/// - [`Error::UnsupportedRule`] if the first token is not `y`, `m`, `d` or `w`.
/// - [`Error::MalformedParameters`] if a parameter token is not an integer or
///   a comma-separated list of integers.
pub fn parse(text: &str) -> Result<RecurrenceRule> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(RecurrenceRule::None);
    }

    let mut tokens = text.split(' ');
    let marker = tokens.next().unwrap_or(text);
    let kind = RuleKind::from_marker(marker)
        .ok_or_else(|| Error::unsupported(format!("unknown rule kind {marker:?}")))?;

    let mut params = ParamGroups::default();
    for (index, token) in tokens.enumerate() {
        params.extend_at(index, parse_token(token)?);
    }

    let rule = match kind {
        RuleKind::None => RecurrenceRule::None,
        RuleKind::Yearly => {
            if !params.is_empty() {
                debug!(%params, "Discarding parameters of yearly rule");
            }
            RecurrenceRule::Yearly
        }
        RuleKind::Monthly => RecurrenceRule::Monthly(params),
        RuleKind::Daily => RecurrenceRule::Daily(params),
        RuleKind::Weekly => RecurrenceRule::Weekly(params),
    };

    debug!(%rule, kind = kind.display_name(), "Parsed recurrence rule");
    Ok(rule)
}

/// Parses one parameter token: an integer, or failing that, an integer list.
fn parse_token(token: &str) -> Result<Vec<i64>> {
    if let Ok(value) = token.parse::<i64>() {
        return Ok(vec![value]);
    }
    token
        .split(',')
        .map(|piece| {
            piece.parse::<i64>().map_err(|_| {
                Error::malformed(format!("{piece:?} in {token:?} is not an integer"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(raw: &[&[i64]]) -> ParamGroups {
        ParamGroups::new(raw.iter().map(|g| g.to_vec()).collect())
    }

    mod kinds {
        use super::*;

        #[test]
        fn empty_text_is_none() {
            assert_eq!(parse("").unwrap(), RecurrenceRule::None);
        }

        #[test]
        fn whitespace_only_is_none() {
            for text in [" ", "\t", "  \n  "] {
                assert_eq!(parse(text).unwrap(), RecurrenceRule::None);
            }
        }

        #[test]
        fn yearly() {
            assert_eq!(parse("y").unwrap(), RecurrenceRule::Yearly);
        }

        #[test]
        fn yearly_discards_parameters() {
            assert_eq!(parse("y 3").unwrap(), RecurrenceRule::Yearly);
        }

        #[test]
        fn yearly_still_checks_parameter_syntax() {
            assert!(matches!(
                parse("y x"),
                Err(Error::MalformedParameters(_))
            ));
        }

        #[test]
        fn monthly_is_recognized() {
            assert_eq!(
                parse("m").unwrap(),
                RecurrenceRule::Monthly(ParamGroups::default())
            );
            assert_eq!(
                parse("m 1,15 -1").unwrap(),
                RecurrenceRule::Monthly(groups(&[&[1, 15], &[-1]]))
            );
        }

        #[test]
        fn daily() {
            assert_eq!(
                parse("d 5").unwrap(),
                RecurrenceRule::Daily(groups(&[&[5]]))
            );
        }

        #[test]
        fn weekly_list() {
            assert_eq!(
                parse("w 1,3,5").unwrap(),
                RecurrenceRule::Weekly(groups(&[&[1, 3, 5]]))
            );
        }

        #[test]
        fn surrounding_whitespace_is_trimmed() {
            assert_eq!(
                parse("  d 7 \n").unwrap(),
                RecurrenceRule::Daily(groups(&[&[7]]))
            );
        }

        #[test]
        fn unknown_marker() {
            let err = parse("x 5").unwrap_err();
            assert!(matches!(err, Error::UnsupportedRule(_)));
        }

        #[test]
        fn marker_is_case_sensitive() {
            assert!(matches!(parse("D 5"), Err(Error::UnsupportedRule(_))));
            assert!(matches!(parse("day 5"), Err(Error::UnsupportedRule(_))));
        }
    }

    mod parameters {
        use super::*;

        #[test]
        fn no_range_checks_while_parsing() {
            assert_eq!(
                parse("d 401").unwrap(),
                RecurrenceRule::Daily(groups(&[&[401]]))
            );
            assert_eq!(
                parse("w 0,8").unwrap(),
                RecurrenceRule::Weekly(groups(&[&[0, 8]]))
            );
            assert_eq!(
                parse("d -3").unwrap(),
                RecurrenceRule::Daily(groups(&[&[-3]]))
            );
        }

        #[test]
        fn one_group_per_token() {
            assert_eq!(
                parse("w 1 2,3").unwrap(),
                RecurrenceRule::Weekly(groups(&[&[1], &[2, 3]]))
            );
        }

        #[test]
        fn duplicates_are_kept() {
            assert_eq!(
                parse("d 5,5").unwrap(),
                RecurrenceRule::Daily(groups(&[&[5, 5]]))
            );
        }

        #[test]
        fn non_integer_token() {
            assert!(matches!(parse("d five"), Err(Error::MalformedParameters(_))));
        }

        #[test]
        fn bad_piece_in_list() {
            assert!(matches!(parse("w 1,x,3"), Err(Error::MalformedParameters(_))));
            assert!(matches!(parse("w 1,,3"), Err(Error::MalformedParameters(_))));
            assert!(matches!(parse("w 1,"), Err(Error::MalformedParameters(_))));
        }

        #[test]
        fn doubled_space_is_malformed() {
            assert!(matches!(parse("d  5"), Err(Error::MalformedParameters(_))));
        }

        #[test]
        fn extend_at_accumulates() {
            let mut params = ParamGroups::default();
            params.extend_at(0, [1]);
            params.extend_at(0, [2, 3]);
            params.extend_at(2, [7]);
            assert_eq!(params, groups(&[&[1, 2, 3], &[], &[7]]));
        }
    }

    mod display {
        use super::*;

        #[test]
        fn canonical_text() {
            for text in ["", "y", "m", "d 5", "w 1,3", "w 1 2,3"] {
                assert_eq!(parse(text).unwrap().to_string(), text);
            }
        }

        #[test]
        fn canonical_text_drops_noise() {
            assert_eq!(parse("  y 2 ").unwrap().to_string(), "y");
            assert_eq!(parse("d +5").unwrap().to_string(), "d 5");
        }

        #[test]
        fn from_str_matches_parse() {
            let rule: RecurrenceRule = "w 7".parse().unwrap();
            assert_eq!(rule, parse("w 7").unwrap());
            assert_eq!(rule.kind(), RuleKind::Weekly);
        }

        #[test]
        fn parse_is_idempotent() {
            for text in ["", "y", "d 30", "w 2,4,6", "m 3"] {
                assert_eq!(parse(text).unwrap(), parse(text).unwrap());
            }
        }
    }
}
