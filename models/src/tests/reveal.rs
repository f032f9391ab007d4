use crate::RevealOptions;

use std::time::Duration;

/// **VALUE**: Verifies the default stagger of 100ms per batch rank.
///
/// **WHY THIS MATTERS**: The cascade timing is the visible behavior of the reveal effect.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one that delays the first entry.
#[test]
fn given_default_options_when_delay_computed_then_rank_times_hundred_ms() {
    let options = RevealOptions::default();

    assert_eq!(options.delay_for(0), Duration::ZERO);
    assert_eq!(options.delay_for(1), Duration::from_millis(100));
    assert_eq!(options.delay_for(5), Duration::from_millis(500));
}

/// **VALUE**: Verifies that partial JSON fills missing fields with defaults.
///
/// **WHY THIS MATTERS**: The browser host reads these options from a JSON block the renderer
/// embeds. Older pages may not carry every field.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]` on a field.
#[test]
fn given_partial_json_when_deserialized_then_defaults_fill_gaps() {
    let options: RevealOptions = serde_json::from_str(r#"{ "stagger_ms": 50 }"#).unwrap();

    assert_eq!(options.stagger_ms, 50);
    assert_eq!(options.threshold, 0.2);
    assert_eq!(options.root_margin, "0px 0px -100px 0px");
    assert_eq!(options.revealed_class, "visible");
}
