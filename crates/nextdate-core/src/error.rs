//! Error types for rule parsing and date calculation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for recurrence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which date input a [`Error::DateFormat`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    /// The reference date ("now").
    Reference,
    /// The anchor date the task counts from.
    Anchor,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Anchor => "anchor",
        }
    }
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while parsing a rule or computing a next date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A date literal is not a valid 8-digit `YYYYMMDD` calendar date.
    #[error("invalid {field} date {value:?}: expected YYYYMMDD")]
    DateFormat { field: DateField, value: String },

    /// The kind marker is unknown, or the kind is reserved but unimplemented.
    #[error("unsupported rule: {0}")]
    UnsupportedRule(String),

    /// A parameter token is not an integer or comma-separated integer list.
    #[error("malformed parameters: {0}")]
    MalformedParameters(String),

    /// Parameters are integers but break the bounds or cardinality of the kind.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The computed date does not fit in the supported calendar range.
    #[error("date out of range")]
    DateOutOfRange,
}

impl Error {
    /// Creates a date format error for the given input.
    pub fn date_format(field: DateField, value: impl Into<String>) -> Self {
        Self::DateFormat {
            field,
            value: value.into(),
        }
    }

    /// Creates an unsupported rule error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedRule(message.into())
    }

    /// Creates a malformed parameters error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedParameters(message.into())
    }

    /// Creates an invalid parameters error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameters(message.into())
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DateFormat { .. } => ErrorCode::DateFormat,
            Self::UnsupportedRule(_) => ErrorCode::UnsupportedRule,
            Self::MalformedParameters(_) => ErrorCode::MalformedParameters,
            Self::InvalidParameters(_) => ErrorCode::InvalidParameters,
            Self::DateOutOfRange => ErrorCode::DateOutOfRange,
        }
    }
}

/// Machine-readable error classification.
///
/// Transports map these to their own status codes; the wire name is the
/// `snake_case` variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    DateFormat,
    UnsupportedRule,
    MalformedParameters,
    InvalidParameters,
    DateOutOfRange,
}

impl ErrorCode {
    /// Returns the wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateFormat => "date_format",
            Self::UnsupportedRule => "unsupported_rule",
            Self::MalformedParameters => "malformed_parameters",
            Self::InvalidParameters => "invalid_parameters",
            Self::DateOutOfRange => "date_out_of_range",
        }
    }

    /// Returns a human-readable description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DateFormat => "A date is not in YYYYMMDD form",
            Self::UnsupportedRule => "The recurrence rule is not supported",
            Self::MalformedParameters => "The rule parameters could not be parsed",
            Self::InvalidParameters => "The rule parameters are out of bounds",
            Self::DateOutOfRange => "The computed date is out of range",
        }
    }
}
