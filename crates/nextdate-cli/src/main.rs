//! nextdate CLI entry point.

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

use nextdate_cli::cli::Cli;
use nextdate_cli::config::ClientConfig;
use nextdate_cli::error::{ClientError, ClientResult};
use nextdate_core::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return fail(&e, cli.json),
    };
    let json = cli.json || config.output.json;

    // Initialize tracing
    let log_format = cli.log_format.unwrap_or(config.logging.format);
    let mut tracing_config = TracingConfig::cli(cli.debug || config.debug).with_format(log_format);
    if let Some(ref filter) = config.logging.filter {
        tracing_config = tracing_config.with_env_filter(filter);
    }
    if let Err(e) = init_tracing(tracing_config) {
        return fail(&ClientError::from(e), json);
    }

    let today = Local::now().date_naive();
    match nextdate_cli::execute(&cli.command, json, &config, today) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e, json),
    }
}

fn load_config(cli: &Cli) -> ClientResult<ClientConfig> {
    match cli.config {
        Some(ref path) => ClientConfig::load_from(path),
        None => ClientConfig::load(),
    }
}

/// Reports `err` and maps it to an exit code.
///
/// JSON mode writes the error body to stdout so callers parse one stream.
fn fail(err: &ClientError, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string(&err.to_body()) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("error: {}", err),
        }
    } else {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.exit_code())
}
