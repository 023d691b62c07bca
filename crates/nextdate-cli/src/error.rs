//! Client error types.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Exit code for rejected input (bad date or rule).
pub const EXIT_INPUT: u8 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Errors that can occur in the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rule or date rejected by the core.
    #[error(transparent)]
    Core(#[from] nextdate_core::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// Logging could not be initialized.
    #[error("logging setup failed: {0}")]
    Tracing(#[from] nextdate_core::TracingError),
}

impl ClientError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns the wire code used in JSON error output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Core(err) => err.code().as_str(),
            Self::Config(_) | Self::ReadConfig { .. } => "config",
            Self::Serialize(_) => "serialize",
            Self::Tracing(_) => "tracing",
        }
    }

    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => EXIT_INPUT,
            _ => EXIT_FAILURE,
        }
    }

    /// Builds the JSON error body.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

/// JSON body printed for a failed command in `--json` mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Code and message of a failed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
