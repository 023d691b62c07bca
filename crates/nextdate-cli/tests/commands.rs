//! End-to-end tests for command execution and rendering.

use chrono::NaiveDate;
use clap::Parser;

use nextdate_cli::{Cli, ClientConfig, ClientError, execute};

/// Fixed "today" for every test: Sunday 2024-03-10.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

fn run_with(config: &ClientConfig, args: &[&str]) -> Result<String, ClientError> {
    let mut argv = vec!["nextdate"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    execute(
        &cli.command,
        cli.json || config.output.json,
        config,
        today(),
    )
}

fn run(args: &[&str]) -> Result<String, ClientError> {
    run_with(&ClientConfig::default(), args)
}

mod next {
    use super::*;

    #[test]
    fn daily_text() {
        let args = [
            "next", "--now", "20240115", "--date", "20240110", "--repeat", "d 5",
        ];
        let out = run(&args).unwrap();
        insta::assert_snapshot!(out, @"20240120");
    }

    #[test]
    fn weekly_text() {
        let args = [
            "next", "--now", "20240301", "--date", "20240101", "--repeat", "w 1,3",
        ];
        let out = run(&args).unwrap();
        insta::assert_snapshot!(out, @"20240304");
    }

    #[test]
    fn now_defaults_to_today() {
        let out = run(&["next", "--date", "20240301", "--repeat", "d 7"]).unwrap();
        assert_eq!(out, "20240315");
    }

    #[test]
    fn json_output() {
        let args = [
            "--json", "next", "--now", "20240110", "--date", "20240115", "--repeat", "d 3",
        ];
        let out = run(&args).unwrap();
        insta::assert_snapshot!(out, @r#"{"next_date":"20240118"}"#);
    }

    #[test]
    fn no_recurrence_json() {
        let out = run(&["next", "--date", "20240115", "--json"]).unwrap();
        insta::assert_snapshot!(out, @r#"{"next_date":null}"#);
    }

    #[test]
    fn no_recurrence_text_from_config() {
        let config = ClientConfig::from_toml("[output]\nno_repeat_text = \"-\"\n").unwrap();
        let out = run_with(&config, &["next", "--date", "20240115"]).unwrap();
        assert_eq!(out, "-");
    }

    #[test]
    fn json_enabled_by_config() {
        let config = ClientConfig::from_toml("[output]\njson = true\n").unwrap();
        let args = [
            "next", "--now", "20240601", "--date", "20200601", "--repeat", "y",
        ];
        let out = run_with(&config, &args).unwrap();
        assert_eq!(out, r#"{"next_date":"20240601"}"#);
    }
}

mod errors {
    use super::*;

    fn error_json(args: &[&str]) -> serde_json::Value {
        let err = run(args).unwrap_err();
        serde_json::to_value(err.to_body()).unwrap()
    }

    #[test]
    fn over_limit_is_invalid_parameters() {
        let err = run(&["next", "--date", "20240101", "--repeat", "d 401"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.code(), "invalid_parameters");
    }

    #[test]
    fn unknown_kind() {
        let body = error_json(&["next", "--date", "20240101", "--repeat", "x 5"]);
        assert_eq!(body["error"]["code"], "unsupported_rule");
    }

    #[test]
    fn monthly() {
        let body = error_json(&["next", "--date", "20240101", "--repeat", "m"]);
        assert_eq!(body["error"]["code"], "unsupported_rule");
    }

    #[test]
    fn malformed() {
        let body = error_json(&["parse", "w 1,a"]);
        assert_eq!(body["error"]["code"], "malformed_parameters");
    }

    #[test]
    fn bad_reference_date() {
        let args = [
            "next", "--now", "2024-1-1", "--date", "20240101", "--repeat", "d 1",
        ];
        let body = error_json(&args);
        assert_eq!(body["error"]["code"], "date_format");
        assert_eq!(
            body["error"]["message"],
            "invalid reference date \"2024-1-1\": expected YYYYMMDD"
        );
    }

    #[test]
    fn result_past_year_9999() {
        let args = [
            "next", "--now", "99991231", "--date", "99990101", "--repeat", "y",
        ];
        let err = run(&args).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.code(), "date_out_of_range");
    }

    #[test]
    fn bad_today_flag() {
        let args = [
            "done", "--date", "20240101", "--repeat", "d 1", "--today", "x",
        ];
        let err = run(&args).unwrap_err();
        assert_eq!(err.code(), "date_format");
    }
}

mod parse {
    use super::*;

    #[test]
    fn text() {
        let out = run(&["parse", "d 30"]).unwrap();
        insta::assert_snapshot!(out, @"d 30 (daily)");
    }

    #[test]
    fn json_weekly() {
        let out = run(&["--json", "parse", "w 3,1"]).unwrap();
        insta::assert_snapshot!(
            out,
            @r#"{"rule":"w 3,1","kind":"weekly","cadence":{"kind":"weekly","value":[1,3]}}"#
        );
    }

    #[test]
    fn json_empty() {
        let out = run(&["--json", "parse", ""]).unwrap();
        insta::assert_snapshot!(out, @r#"{"rule":"","kind":"none","cadence":null}"#);
    }
}

mod task {
    use super::*;

    #[test]
    fn resolve_empty_date() {
        assert_eq!(run(&["resolve"]).unwrap(), "20240310");
    }

    #[test]
    fn resolve_past_yearly() {
        let out = run(&["resolve", "--date", "20230501", "--repeat", "y"]).unwrap();
        assert_eq!(out, "20240501");
    }

    #[test]
    fn resolve_with_explicit_today() {
        let out = run(&["resolve", "--date", "20240101", "--today", "20240201"]).unwrap();
        assert_eq!(out, "20240201");
    }

    #[test]
    fn done_json() {
        let out = run(&["--json", "done", "--date", "20240301", "--repeat", "w 1"]).unwrap();
        insta::assert_snapshot!(out, @r#"{"action":"reschedule","date":"20240318"}"#);
    }

    #[test]
    fn done_one_shot() {
        let out = run(&["--json", "done", "--date", "20240301"]).unwrap();
        insta::assert_snapshot!(out, @r#"{"action":"remove"}"#);
    }
}

mod config {
    use super::*;

    #[test]
    fn path_command() {
        let out = run(&["config", "path"]).unwrap();
        assert!(out.ends_with("config.toml"));
    }

    #[test]
    fn dump_reflects_loaded_config() {
        let toml = "debug = true\n[logging]\nformat = \"json\"\n";
        let config = ClientConfig::from_toml(toml).unwrap();
        let out = run_with(&config, &["config", "dump"]).unwrap();
        assert!(out.contains("debug = true"));
        assert!(out.contains("format = \"json\""));
    }
}
