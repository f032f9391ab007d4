use portfolio_core::SiteConfig;
use portfolio_core::render::STYLESHEET;
use portfolio_core::site::write_site;

/// **VALUE**: Verifies a build writes `index.html` and the stylesheet, with no temp files left.
///
/// **WHY THIS MATTERS**: This is what `portfolio build` publishes.
///
/// **BUG THIS CATCHES**: Would catch a missing rename (leaving `.tmp` files) or a stylesheet
/// that is never written.
#[test]
fn given_default_config_when_site_written_then_index_and_stylesheet_exist() {
    // GIVEN: An output directory that does not exist yet
    let root = tempfile::tempdir().unwrap();
    let out_dir = root.path().join("dist");

    // WHEN: Writing the site
    let report = write_site(&SiteConfig::default(), &out_dir).unwrap();

    // THEN: Both files exist with the expected content
    let index = std::fs::read_to_string(&report.index_path).unwrap();
    assert!(index.starts_with("<!DOCTYPE html>"));
    assert!(index.contains("<title>Jovel</title>"));
    assert_eq!(
        std::fs::read_to_string(&report.stylesheet_path).unwrap(),
        STYLESHEET
    );

    // AND: No temp files remain
    let leftovers: Vec<_> = std::fs::read_dir(&out_dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "Temp files left behind: {leftovers:?}");
}

/// **VALUE**: Verifies the stylesheet hides reveal targets until they get the revealed class.
///
/// **WHY THIS MATTERS**: Without the hidden starting state the controller's class has no
/// visible effect.
///
/// **BUG THIS CATCHES**: Would catch the reveal rules being dropped from the stylesheet.
#[test]
fn given_stylesheet_when_inspected_then_reveal_transition_defined() {
    assert!(STYLESHEET.contains(".skill-item.visible"));
    assert!(STYLESHEET.contains(".project-card.visible"));
    assert!(STYLESHEET.contains("opacity: 0"));
}

/// **VALUE**: Verifies writing into an unwritable location reports a write error.
///
/// **WHY THIS MATTERS**: The CLI must exit with a clear message rather than panic.
///
/// **BUG THIS CATCHES**: Would catch an `unwrap()` on directory creation.
#[test]
fn given_unwritable_out_dir_when_site_written_then_write_error() {
    // GIVEN: A path below a regular file
    let root = tempfile::tempdir().unwrap();
    let file = root.path().join("not-a-dir");
    std::fs::write(&file, "x").unwrap();

    // WHEN: Writing below it
    let result = write_site(&SiteConfig::default(), &file.join("dist"));

    // THEN: WriteError
    let err = result.unwrap_err();
    assert!(
        err.to_string().starts_with("Site Write Error"),
        "Unexpected error: {err}"
    );
}
