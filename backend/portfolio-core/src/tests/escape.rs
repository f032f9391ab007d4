// Unit tests for HTML escaping and phrase highlighting

use crate::render::{escape_html, highlight_phrases};

/// **VALUE**: Verifies all five HTML-significant characters are escaped.
///
/// **WHY THIS MATTERS**: Content comes from a user-edited TOML file and lands in both
/// element text and attribute values.
///
/// **BUG THIS CATCHES**: Would catch a missing quote escape that breaks out of `alt="..."`.
#[test]
fn given_markup_characters_when_escaped_then_entities_emitted() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

/// **VALUE**: Verifies highlight phrases are wrapped and the rest is escaped.
///
/// **WHY THIS MATTERS**: The about paragraph mixes plain text with highlighted phrases.
///
/// **BUG THIS CATCHES**: Would catch escaping the generated span markup itself.
#[test]
fn given_paragraph_with_phrases_when_highlighted_then_spans_wrap_matches() {
    // GIVEN: A paragraph with two phrases and a special character
    let phrases = vec!["Jovel".to_string(), "digital experiences".to_string()];

    // WHEN: Highlighting
    let html = highlight_phrases("I'm Jovel & I build digital experiences.", &phrases, "hl");

    // THEN: Both phrases wrapped, apostrophe and ampersand escaped
    assert_eq!(
        html,
        "I&#39;m <span class=\"hl\">Jovel</span> &amp; I build <span class=\"hl\">digital experiences</span>."
    );
}

/// **VALUE**: Verifies overlapping phrases never produce nested spans.
///
/// **WHY THIS MATTERS**: Nested or interleaved spans would break the markup.
///
/// **BUG THIS CATCHES**: Would catch a naive `str::replace` loop that re-matches inside
/// earlier replacements.
#[test]
fn given_overlapping_phrases_when_highlighted_then_longest_match_wins() {
    let phrases = vec![
        "digital".to_string(),
        "digital experiences".to_string(),
        "span".to_string(),
    ];

    let html = highlight_phrases("digital experiences", &phrases, "hl");

    assert_eq!(html, "<span class=\"hl\">digital experiences</span>");
}
