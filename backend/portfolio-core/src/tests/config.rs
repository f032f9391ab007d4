// Unit tests for site configuration loading and validation

use crate::config::SiteConfig;
use crate::config::client::ClientConfig;
use crate::error::config::ConfigError;

use std::path::Path;

fn parse(toml: &str) -> Result<SiteConfig, ConfigError> {
    SiteConfig::from_toml(toml, Path::new("portfolio.toml"))
}

/// **VALUE**: Verifies the built-in content passes validation.
///
/// **WHY THIS MATTERS**: A fresh checkout renders the site with no config file at all.
///
/// **BUG THIS CATCHES**: Would catch a default that trips its own validation rules.
#[test]
fn given_default_config_when_validated_then_succeeds() {
    let config = SiteConfig::default();

    assert!(config.validate().is_ok(), "Defaults must validate");
    assert_eq!(config.skills.len(), 4);
    assert_eq!(config.projects.len(), 6);
    assert_eq!(config.reveal.stagger_ms, 100);
}

/// **VALUE**: Verifies a partial file overrides only the tables it names.
///
/// **WHY THIS MATTERS**: Most owners only want to change their name and project list.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]` that makes every table
/// mandatory.
#[test]
fn given_partial_toml_when_parsed_then_missing_tables_use_defaults() {
    // GIVEN: A file that only sets metadata and one project
    let toml = r#"
        [site]
        title = "Ada"
        description = "Portfolio of Ada"
        brand = "ADA"
        copyright_holder = "Ada"
        year = 2026

        [[projects]]
        title = "Engine"
        description = "Analytical engine notes"
        image = "/images/engine.png"
        link = "https://example.com/engine"
        open_in_new_tab = true
    "#;

    // WHEN: Parsing
    let config = parse(toml).unwrap();

    // THEN: Named tables replaced, the rest defaulted
    assert_eq!(config.site.title, "Ada");
    assert_eq!(config.site.favicon, "/favicon.ico");
    assert_eq!(config.projects.len(), 1);
    assert!(config.projects[0].open_in_new_tab);
    assert_eq!(config.skills.len(), 4, "Skills should fall back to defaults");
    assert_eq!(config.contact.submit_label, "SEND MESSAGE");
}

/// **VALUE**: Verifies that unsupported config versions are rejected.
///
/// **WHY THIS MATTERS**: A file written for a newer layout may mean something different.
///
/// **BUG THIS CATCHES**: Would catch the version check being dropped.
#[test]
fn given_future_version_when_parsed_then_validation_error() {
    let result = parse("version = 7");

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

/// **VALUE**: Verifies empty and duplicate skills are rejected.
///
/// **WHY THIS MATTERS**: The skills grid is a reveal target list; an empty one renders a
/// blank section.
///
/// **BUG THIS CATCHES**: Would catch either check being removed.
#[test]
fn given_bad_skill_lists_when_parsed_then_validation_error() {
    assert!(matches!(
        parse("skills = []"),
        Err(ConfigError::ValidationError { .. })
    ));

    let duplicate = r#"
        [[skills]]
        name = "Design"
        description = "a"

        [[skills]]
        name = "Design"
        description = "b"
    "#;
    let err = parse(duplicate).unwrap_err();
    assert!(
        err.to_string().contains("Duplicate skill: Design"),
        "Unexpected error: {err}"
    );
}

/// **VALUE**: Verifies reveal tuning bounds.
///
/// **WHY THIS MATTERS**: A threshold outside `[0, 1]` makes the browser's observer
/// constructor throw, so nothing would ever reveal.
///
/// **BUG THIS CATCHES**: Would catch the threshold or stagger bounds being loosened.
#[test]
fn given_out_of_range_reveal_options_when_parsed_then_validation_error() {
    assert!(parse("[reveal]\nthreshold = 1.5").is_err());
    assert!(parse("[reveal]\nstagger_ms = 60000").is_err());
    assert!(parse("[reveal]\nrevealed_class = \"is visible\"").is_err());
    assert!(parse("[reveal]\nthreshold = 0.5\nstagger_ms = 50").is_ok());
}

/// **VALUE**: Verifies project links must resolve as URLs.
///
/// **WHY THIS MATTERS**: A broken link would render a dead "View Project" button.
///
/// **BUG THIS CATCHES**: Would catch link validation being skipped, or relative and
/// protocol-relative links being rejected.
#[test]
fn given_project_links_when_parsed_then_only_resolvable_links_accepted() {
    let with_link = |link: &str| {
        format!(
            "[[projects]]\ntitle = \"P\"\ndescription = \"d\"\nimage = \"/i.png\"\nlink = \"{link}\"\n"
        )
    };

    assert!(parse(&with_link("#work")).is_ok());
    assert!(parse(&with_link("//example.com/p")).is_ok());
    assert!(parse(&with_link("/projects/p")).is_ok());
    assert!(parse(&with_link("http://[::1")).is_err());
    assert!(parse(&with_link(" ")).is_err());
}

/// **VALUE**: Verifies a missing config file yields defaults instead of an error.
///
/// **WHY THIS MATTERS**: `portfolio build` must work with no setup.
///
/// **BUG THIS CATCHES**: Would catch `load()` returning `ReadError` for `NotFound`.
#[test]
fn given_missing_file_when_loaded_then_defaults_returned() {
    // GIVEN: An empty directory
    let dir = tempfile::tempdir().unwrap();

    // WHEN: Loading from it
    let config = SiteConfig::load(dir.path()).unwrap();

    // THEN: Canonical content
    assert_eq!(config.site.title, "Jovel");
}

/// **VALUE**: Verifies a corrupted file surfaces a parse error with its path.
///
/// **WHY THIS MATTERS**: Silently falling back to defaults would publish the wrong site.
///
/// **BUG THIS CATCHES**: Would catch swallowing TOML errors.
#[test]
fn given_corrupted_file_when_loaded_then_parse_error_with_path() {
    // GIVEN: A config file with invalid TOML
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.toml");
    std::fs::write(&path, "[site\ntitle = ").unwrap();

    // WHEN: Loading
    let result = SiteConfig::load_file(&path);

    // THEN: ParseError naming the file
    match result {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

/// **VALUE**: Verifies the browser settings carry the reveal options and confirmation.
///
/// **WHY THIS MATTERS**: The wasm host reads only this subset from the page.
///
/// **BUG THIS CATCHES**: Would catch the confirmation text being lost between config and
/// page.
#[test]
fn given_config_when_client_config_built_then_carries_reveal_and_confirmation() {
    let mut config = SiteConfig::default();
    config.contact.confirmation = "Got it".to_string();
    config.reveal.stagger_ms = 80;

    let client = config.client_config();

    assert_eq!(client.confirmation, "Got it");
    assert_eq!(client.reveal.stagger_ms, 80);
}

/// **VALUE**: Verifies the browser host falls back to defaults on a missing or broken block.
///
/// **WHY THIS MATTERS**: A hand-edited page must still get working reveals.
///
/// **BUG THIS CATCHES**: Would catch a panic or an all-zero config on malformed JSON.
#[test]
fn given_missing_or_malformed_block_when_embedded_read_then_defaults_used() {
    // GIVEN/WHEN: No block, a broken block, and a partial block
    let missing = ClientConfig::from_embedded(None);
    let broken = ClientConfig::from_embedded(Some("{ not json"));
    let partial = ClientConfig::from_embedded(Some(r#"{ "reveal": { "stagger_ms": 40 } }"#));

    // THEN: Defaults fill every gap
    assert_eq!(missing, ClientConfig::default());
    assert_eq!(broken, ClientConfig::default());
    assert_eq!(partial.reveal.stagger_ms, 40);
    assert_eq!(partial.reveal.revealed_class, "visible");
    assert_eq!(partial.confirmation, ClientConfig::default().confirmation);
}
