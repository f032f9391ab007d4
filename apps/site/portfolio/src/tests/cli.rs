// Unit tests for command line parsing

use crate::cli::{Cli, Command};

use clap::{CommandFactory, Parser};

use std::path::PathBuf;

/// **VALUE**: Verifies the clap definition is internally consistent.
///
/// **WHY THIS MATTERS**: clap only reports conflicting flags at runtime.
///
/// **BUG THIS CATCHES**: Would catch duplicate short flags or a bad default.
#[test]
fn given_cli_definition_when_debug_asserted_then_valid() {
    Cli::command().debug_assert();
}

/// **VALUE**: Verifies global flags work after the subcommand.
///
/// **WHY THIS MATTERS**: `portfolio build --config site.toml` is the natural spelling.
///
/// **BUG THIS CATCHES**: Would catch `global = true` being dropped from `--config`.
#[test]
fn given_build_with_flags_when_parsed_then_fields_populated() {
    let cli = Cli::try_parse_from([
        "portfolio",
        "build",
        "--out",
        "public",
        "--config",
        "site.toml",
        "-v",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Command::Build {
            out: PathBuf::from("public")
        }
    );
    assert_eq!(cli.config, PathBuf::from("site.toml"));
    assert!(cli.verbose);
}

/// **VALUE**: Verifies `check --json` parses.
///
/// **WHY THIS MATTERS**: CI scripts depend on the JSON output.
///
/// **BUG THIS CATCHES**: Would catch the flag being renamed.
#[test]
fn given_check_json_when_parsed_then_json_flag_set() {
    let cli = Cli::try_parse_from(["portfolio", "check", "--json"]).unwrap();

    assert_eq!(cli.command, Command::Check { json: true });
}
