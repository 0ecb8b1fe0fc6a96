//! CLI Smoke Test
//!
//! Parses real argument vectors and runs the scan command against a fixture
//! file to make sure flags reach the scanner.

use crate::common::samples::*;
use crate::common::{temp_dir, write_fixture};
use clap::Parser;
use ferret_finder::cli::{Cli, Commands, LogFormat};
use ferret_finder::config::AppConfig;
use ferret_finder::errors::AppError;

#[test]
fn test_scan_requires_exactly_one_target() {
    assert!(Cli::try_parse_from(["ferret", "scan"]).is_err());
    assert!(Cli::try_parse_from(["ferret", "scan", "--file", "a", "--dir", "b"]).is_err());
    assert!(Cli::try_parse_from(["ferret", "scan", "--dir", "b"]).is_ok());
}

#[test]
fn test_global_flags_parse_after_subcommand() {
    let cli = Cli::try_parse_from([
        "ferret",
        "serve",
        "--port",
        "9000",
        "--debug",
        "--log-format",
        "json",
    ])
    .unwrap();
    assert!(cli.debug);
    assert_eq!(cli.log_format, Some(LogFormat::Json));
    assert!(matches!(cli.command, Commands::Serve(_)));
}

#[test]
fn test_codec_commands_take_a_path() {
    let cli = Cli::try_parse_from(["ferret", "encode", "input.txt"]).unwrap();
    assert!(matches!(cli.command, Commands::Encode(_)));
    assert!(Cli::try_parse_from(["ferret", "decode"]).is_err());
}

#[test]
fn test_scan_command_runs_with_overrides() {
    let dir = temp_dir().unwrap();
    let contents = format!("{} {}\n", SECRET_ENCODED, HELLO_ENCODED);
    let path = write_fixture(&dir, "input.txt", contents.as_bytes());
    let path_arg = path.to_string_lossy().to_string();

    let cli = Cli::try_parse_from([
        "ferret",
        "scan",
        "--file",
        path_arg.as_str(),
        "--min-chars",
        "12",
    ])
    .unwrap();

    let Commands::Scan(command) = cli.command else {
        panic!("expected scan command");
    };
    let stats = command.run(&AppConfig::default()).unwrap();
    assert_eq!(stats.files_scanned, 1);
    assert_eq!(stats.findings, 1);
}

#[test]
fn test_scan_command_rejects_bad_regex() {
    let dir = temp_dir().unwrap();
    let path = write_fixture(&dir, "input.txt", b"anything\n");
    let path_arg = path.to_string_lossy().to_string();

    let cli = Cli::try_parse_from([
        "ferret",
        "scan",
        "--file",
        path_arg.as_str(),
        "--regex",
        "(",
    ])
    .unwrap();

    let Commands::Scan(command) = cli.command else {
        panic!("expected scan command");
    };
    let err = command.run(&AppConfig::default()).unwrap_err();
    assert!(matches!(err, AppError::Pattern(_)));
}
