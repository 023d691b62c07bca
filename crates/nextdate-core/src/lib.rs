//! Recurrence rules for tasks: parsing, next-date calculation, task date
//! policies.
//!
//! ```
//! use nextdate_core::next_date_str;
//!
//! assert_eq!(next_date_str("20240115", "20240110", "d 5").unwrap(), "20240120");
//! assert_eq!(next_date_str("20240115", "20240110", "").unwrap(), "");
//! ```

pub mod calc;
pub mod date;
pub mod error;
pub mod rule;
pub mod schedule;
pub mod tracing;

pub use calc::{Cadence, MAX_DAILY_INTERVAL, next_date, next_date_str};
pub use date::{DATE_FORMAT, MAX_YEAR, format_date, parse_date};
pub use error::{DateField, Error, ErrorCode, Result};
pub use rule::{ParamGroups, RecurrenceRule, RuleKind, parse};
pub use schedule::{Completion, complete_task, resolve_task_date};

pub use crate::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
