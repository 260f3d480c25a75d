//! Tests for the parse subcommand and global flags.

use super::parse;
use crate::cli::{Cli, CliCommand, FormatArg};
use clap::Parser;

#[test]
fn cli_parse_parse() {
    match parse(&["urlkit", "parse", "https://example.com/a"]) {
        CliCommand::Parse { url, format } => {
            assert_eq!(url, "https://example.com/a");
            assert!(format.is_none());
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_json() {
    match parse(&["urlkit", "parse", "https://example.com", "--format", "json"]) {
        CliCommand::Parse { format, .. } => assert_eq!(format, Some(FormatArg::Json)),
        _ => panic!("expected Parse with --format"),
    }
}

#[test]
fn cli_parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["urlkit", "parse", "https://example.com", "--format", "xml"]).is_err());
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["urlkit", "parse", "https://example.com", "--config", "/tmp/u.toml"])
        .unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/u.toml")));
}

#[test]
fn cli_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["urlkit"]).is_err());
}
