//! Command-line front end for nextdate.
//!
//! This crate provides the `nextdate` binary: argument parsing, configuration,
//! and text/JSON rendering over `nextdate-core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use chrono::NaiveDate;

pub use cli::{Cli, Command, ConfigAction};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

use commands::{date_or, render};

/// Runs a command and returns what should be printed.
///
/// `today` is the local date; commands whose reference date is not given on
/// the command line use it.
pub fn execute(
    command: &Command,
    json: bool,
    config: &ClientConfig,
    today: NaiveDate,
) -> ClientResult<String> {
    let settings = &config.output;
    match command {
        Command::Next { now, date, repeat } => {
            let report = commands::next::run(now.as_deref(), date, repeat, today)?;
            render(&report, json, settings)
        }
        Command::Parse { rule } => render(&commands::rule::run(rule)?, json, settings),
        Command::Resolve {
            date,
            repeat,
            today: flag,
        } => {
            let today = date_or(flag.as_deref(), today)?;
            let report = commands::task::resolve(today, date, repeat)?;
            render(&report, json, settings)
        }
        Command::Done {
            date,
            repeat,
            today: flag,
        } => {
            let today = date_or(flag.as_deref(), today)?;
            let report = commands::task::done(today, date, repeat)?;
            render(&report, json, settings)
        }
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(config),
            ConfigAction::Path => Ok(commands::config::path()),
        },
    }
}
