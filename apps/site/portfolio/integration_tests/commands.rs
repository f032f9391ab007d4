use portfolio::cli::Cli;
use portfolio::commands::run;
use portfolio::error::PortfolioError;

use clap::Parser;

// ============================================================================
// Integration tests for CLI commands + portfolio-core
// These run the same code path as the binary, minus logger setup
// ============================================================================

/// **VALUE**: Tests that `build` with a real config file writes the rendered site.
///
/// **WHY THIS MATTERS**: This is the end-to-end path from `portfolio.toml` to the
/// published directory.
///
/// **BUG THIS CATCHES**: Would catch the CLI ignoring `--config` or `--out`.
#[test]
fn given_config_file_when_build_run_then_site_uses_config_content() {
    // GIVEN: A config overriding the title
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("portfolio.toml");
    std::fs::write(
        &config_path,
        r#"
        [site]
        title = "Grace"
        description = "Compilers and more"
        brand = "GRACE"
        copyright_holder = "Grace"
        year = 2026
        "#,
    )
    .unwrap();
    let out_dir = dir.path().join("public");

    // WHEN: Running build
    let cli = Cli::try_parse_from([
        "portfolio",
        "--config",
        config_path.to_str().unwrap(),
        "build",
        "--out",
        out_dir.to_str().unwrap(),
    ])
    .unwrap();
    let output = run(&cli).unwrap();

    // THEN: Summary mentions index.html and the page carries the new title
    assert!(output.contains("index.html"), "Output: {output}");
    let index = std::fs::read_to_string(out_dir.join("index.html")).unwrap();
    assert!(index.contains("<title>Grace</title>"));
    assert!(index.contains("\u{a9} 2026 GRACE. ALL RIGHTS RESERVED."));
}

/// **VALUE**: Tests that a missing config file falls back to built-in content.
///
/// **WHY THIS MATTERS**: A first run should produce a working page with no setup.
///
/// **BUG THIS CATCHES**: Would catch `render` failing with a read error.
#[test]
fn given_missing_config_when_render_run_then_default_page_returned() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let cli = Cli::try_parse_from(["portfolio", "render", "--config", missing.to_str().unwrap()])
        .unwrap();
    let page = run(&cli).unwrap();

    assert!(page.contains("<title>Jovel</title>"));
}

/// **VALUE**: Tests that `check --json` reports counts and that invalid configs fail.
///
/// **WHY THIS MATTERS**: CI uses `check` to gate publishing.
///
/// **BUG THIS CATCHES**: Would catch `check` passing an invalid file, or JSON output that
/// does not parse.
#[test]
fn given_valid_and_invalid_configs_when_check_run_then_reports_accordingly() {
    let dir = tempfile::tempdir().unwrap();

    // GIVEN: A valid (missing → defaults) config
    let missing = dir.path().join("missing.toml");
    let cli = Cli::try_parse_from([
        "portfolio",
        "check",
        "--json",
        "--config",
        missing.to_str().unwrap(),
    ])
    .unwrap();

    // WHEN/THEN: JSON with the default counts
    let report: serde_json::Value = serde_json::from_str(&run(&cli).unwrap()).unwrap();
    assert_eq!(report["status"], "ok");
    assert_eq!(report["skills"], 4);
    assert_eq!(report["projects"], 6);

    // GIVEN: An invalid config
    let invalid = dir.path().join("invalid.toml");
    std::fs::write(&invalid, "skills = []").unwrap();
    let cli = Cli::try_parse_from(["portfolio", "check", "--config", invalid.to_str().unwrap()])
        .unwrap();

    // WHEN/THEN: Core error
    match run(&cli) {
        Err(PortfolioError::Core { message, .. }) => {
            assert!(message.contains("At least one skill"), "Message: {message}")
        }
        other => panic!("Expected Core error, got {other:?}"),
    }
}
