use crate::page::discards_page;

/// **VALUE**: Verifies only a discarding `pagehide` tears the page down.
///
/// **WHY THIS MATTERS**: A page restored from the back-forward cache never runs the wasm start
/// again. If it had been torn down, unrevealed cards would stay hidden and anchors would jump.
///
/// **BUG THIS CATCHES**: Would catch unmounting on every `pagehide`, including cached ones.
#[test]
fn given_pagehide_when_page_is_cached_then_kept_mounted() {
    // GIVEN/WHEN/THEN: Cached pages stay mounted
    assert!(!discards_page(Some(true)));

    // AND: Discarded pages, or events without transition details, tear down
    assert!(discards_page(Some(false)));
    assert!(discards_page(None));
}
