/// What the controller did with an anchor activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// In-page link with an existing target: smooth scroll started.
    Scrolled,
    /// In-page link whose target does not exist: navigation suppressed, no scroll.
    Suppressed,
    /// Not an in-page link, or the controller is torn down: left to the browser.
    Ignored,
}

impl AnchorOutcome {
    /// Whether the host must cancel the browser's default navigation.
    pub fn prevents_default(self) -> bool {
        matches!(self, AnchorOutcome::Scrolled | AnchorOutcome::Suppressed)
    }
}

/// Fragment identifier of an in-page `href`, without the leading `#`.
///
/// Returns `None` for anything that is not a same-page fragment link. A bare
/// `#` yields an empty fragment.
pub fn fragment_of(href: &str) -> Option<&str> {
    href.trim().strip_prefix('#')
}
