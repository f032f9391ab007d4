// Unit tests for anchor href parsing

use crate::scroll::{AnchorOutcome, fragment_of};

/// **VALUE**: Verifies which hrefs count as in-page fragment links.
///
/// **WHY THIS MATTERS**: Only `#...` links may be intercepted. Intercepting an external
/// project link would trap the visitor on the page.
///
/// **BUG THIS CATCHES**: Would catch a parser that treats `/path#frag` or absolute URLs as
/// in-page links.
#[test]
fn given_various_hrefs_when_fragment_extracted_then_only_hash_links_match() {
    assert_eq!(fragment_of("#work"), Some("work"));
    assert_eq!(fragment_of("#"), Some(""));
    assert_eq!(fragment_of("  #contact "), Some("contact"));
    assert_eq!(fragment_of("https://example.com/#work"), None);
    assert_eq!(fragment_of("/about#team"), None);
    assert_eq!(fragment_of(""), None);
}

/// **VALUE**: Verifies that only handled outcomes cancel the browser default.
///
/// **WHY THIS MATTERS**: The host calls `preventDefault` based on this flag alone.
///
/// **BUG THIS CATCHES**: Would catch `Ignored` accidentally cancelling navigation.
#[test]
fn given_outcomes_when_checking_prevent_default_then_ignored_is_passthrough() {
    assert!(AnchorOutcome::Scrolled.prevents_default());
    assert!(AnchorOutcome::Suppressed.prevents_default());
    assert!(!AnchorOutcome::Ignored.prevents_default());
}
