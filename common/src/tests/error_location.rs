use crate::ErrorLocation;
use std::panic::Location;

#[track_caller]
fn capture_location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

/// **VALUE**: Verifies that ErrorLocation Display produces the bracketed `[file:line:column]` form.
///
/// **WHY THIS MATTERS**: Every error message in the workspace ends with this stamp. Log
/// readers grep for it, so the format must stay stable.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops the brackets or one of
/// the three components.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation captured in this file
    let location = capture_location();

    // WHEN: Formatting as string
    let formatted = format!("{location}");

    // THEN: Should produce "[file:line:column]"
    assert!(formatted.starts_with('['), "Should start with '['");
    assert!(formatted.ends_with(']'), "Should end with ']'");
    assert!(
        formatted.contains("error_location.rs"),
        "Should include filename"
    );
    assert!(
        formatted.ends_with(&format!(":{}:{}]", location.line, location.column)),
        "Should end with line and column"
    );
}

/// **VALUE**: Verifies that `#[track_caller]` propagation yields distinct lines per call site.
///
/// **WHY THIS MATTERS**: Error constructors are called from helpers marked `#[track_caller]`.
/// If propagation broke, every error would point at the helper instead of the real site.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[track_caller]` from a capture helper.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN/WHEN: Capturing location from two consecutive lines
    let first = capture_location();
    let second = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(first.file, second.file, "Should have same file");
    assert_eq!(first.line + 1, second.line, "Lines should be sequential");
}
