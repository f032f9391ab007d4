//! Page content fed into the single page template.
//!
//! Each section is plain data. The renderer numbers skills and projects from
//! their position, so reordering the lists is enough to reorder the page.

use serde::{Deserialize, Serialize};

/// Static `<head>` metadata plus the brand shown in the navbar and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub brand: String,
    pub copyright_holder: String,
    pub year: u16,
    #[serde(default = "default_favicon")]
    pub favicon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub heading: String,
    pub subtitle: String,
    pub cta_label: String,
}

/// About section text.
///
/// Any phrase listed in `highlights` is wrapped in a highlight span wherever
/// it appears in a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
}

impl Skill {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub open_in_new_tab: bool,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image: image.into(),
            image_alt: None,
            link: None,
            open_in_new_tab: false,
        }
    }

    pub fn alt_text(&self) -> &str {
        self.image_alt.as_deref().unwrap_or(&self.title)
    }

    /// Link target, or `#` when the project has no page yet.
    pub fn href(&self) -> &str {
        self.link.as_deref().unwrap_or("#")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
    pub title: String,
    pub heading: String,
    pub submit_label: String,
    /// Notice shown to the visitor after pressing submit.
    pub confirmation: String,
}

fn default_favicon() -> String {
    "/favicon.ico".to_string()
}
