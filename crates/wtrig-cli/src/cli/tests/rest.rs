//! Tests for inspect, workers, form, completions and global flags.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_inspect() {
    match parse(&["wtrig", "inspect", "https://example.com/api.php"]) {
        CliCommand::Inspect { source_url } => {
            assert_eq!(source_url, "https://example.com/api.php")
        }
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_workers() {
    match parse(&["wtrig", "workers"]) {
        CliCommand::Workers => {}
        _ => panic!("expected Workers"),
    }
}

#[test]
fn cli_parse_form() {
    match parse(&["wtrig", "form"]) {
        CliCommand::Form => {}
        _ => panic!("expected Form"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["wtrig", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_verbose_is_global() {
    let cli = Cli::try_parse_from(["wtrig", "workers", "-v"]).unwrap();
    assert!(cli.verbose);
    let cli = Cli::try_parse_from(["wtrig", "workers"]).unwrap();
    assert!(!cli.verbose);
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
