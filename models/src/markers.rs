//! Class and id markers shared by the page template and the browser host.
//!
//! Renaming any of these breaks the wiring between the rendered markup and
//! the scroll controller.

use const_format::concatcp;
use serde::{Deserialize, Serialize};

pub const NAVBAR_CLASS: &str = "navbar";
pub const HERO_CLASS: &str = "hero";
pub const SKILL_ITEM_CLASS: &str = "skill-item";
pub const PROJECT_CARD_CLASS: &str = "project-card";

/// Class added to a reveal target once it has scrolled into view.
pub const REVEALED_CLASS: &str = "visible";

/// Selector matching every reveal target.
pub const REVEAL_SELECTOR: &str = concatcp!(".", SKILL_ITEM_CLASS, ", .", PROJECT_CARD_CLASS);

/// Selector matching every in-page anchor.
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Id of the JSON block carrying the browser configuration.
pub const CLIENT_CONFIG_ELEMENT_ID: &str = "portfolio-config";

pub const CONTACT_FORM_CLASS: &str = "contact-form";

/// Selector matching every named contact form input.
pub const CONTACT_FIELD_SELECTOR: &str = concatcp!(".", CONTACT_FORM_CLASS, " [name]");

/// Id of the contact form submit button.
pub const SUBMIT_BUTTON_ID: &str = "contact-submit";

/// Top-level page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Work,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Work,
        SectionId::Contact,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Work => "work",
            SectionId::Contact => "contact",
        }
    }

    /// `href` value that links to this section.
    pub const fn fragment(self) -> &'static str {
        match self {
            SectionId::Home => "#home",
            SectionId::About => "#about",
            SectionId::Skills => "#skills",
            SectionId::Work => "#work",
            SectionId::Contact => "#contact",
        }
    }

    /// Text of the navbar link.
    pub const fn nav_label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Work => "Work",
            SectionId::Contact => "Contact",
        }
    }
}
