//! HTML text escaping.

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape `text` and wrap every occurrence of a phrase in a highlight span.
///
/// Matches never overlap. At equal start positions the longest phrase wins.
pub fn highlight_phrases(text: &str, phrases: &[String], class: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut position = 0;

    while position < text.len() {
        let rest = &text[position..];
        let next = phrases
            .iter()
            .filter(|phrase| !phrase.is_empty())
            .filter_map(|phrase| rest.find(phrase.as_str()).map(|start| (start, phrase.len())))
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let Some((start, len)) = next else {
            output.push_str(&escape_html(rest));
            break;
        };

        output.push_str(&escape_html(&rest[..start]));
        output.push_str("<span class=\"");
        output.push_str(class);
        output.push_str("\">");
        output.push_str(&escape_html(&rest[start..start + len]));
        output.push_str("</span>");
        position += start + len;
    }

    output
}
