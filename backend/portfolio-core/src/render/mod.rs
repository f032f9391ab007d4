//! The single page template.
//!
//! Skills and projects are rendered from configuration data, so there is one
//! template regardless of how many entries the page carries. Every id and
//! class the browser host relies on comes from [`models::markers`].

pub mod escape;

pub use escape::{escape_html, highlight_phrases};

use crate::config::SiteConfig;
use crate::error::render::RenderError;

use models::markers::{
    CLIENT_CONFIG_ELEMENT_ID, CONTACT_FORM_CLASS, HERO_CLASS, NAVBAR_CLASS, PROJECT_CARD_CLASS,
    SKILL_ITEM_CLASS, SUBMIT_BUTTON_ID,
};
use models::{About, ContactSection, FormField, Hero, Project, SectionId, SiteMetadata, Skill};

use std::fmt::{Result as FormatResult, Write};

use log::debug;

/// File name of the stylesheet written next to `index.html`.
pub const STYLESHEET_FILE_NAME: &str = "styles.css";

/// Stylesheet for the page, including the reveal transition.
pub const STYLESHEET: &str = include_str!("../../assets/styles.css");

const HIGHLIGHT_CLASS: &str = "highlight";

/// Render the full HTML document for `config`.
///
/// # Errors
///
/// Returns [`RenderError::ClientConfig`] if the embedded browser settings
/// cannot be serialized.
pub fn render_page(config: &SiteConfig) -> Result<String, RenderError> {
    let client_json = embedded_json(&serde_json::to_string(&config.client_config())?);
    let script_literal = embedded_json(&serde_json::to_string(&config.assets.script_src)?);

    let mut page = String::with_capacity(16 * 1024);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
    write_head(&mut page, &config.site)?;
    page.push_str("<body>\n");
    write_nav(&mut page, &config.site)?;
    write_hero(&mut page, &config.hero)?;
    write_about(&mut page, &config.about)?;
    write_skills(&mut page, &config.skills)?;
    write_projects(&mut page, &config.projects)?;
    write_contact(&mut page, &config.contact)?;
    write_footer(&mut page, &config.site)?;
    write_scripts(&mut page, &client_json, &script_literal)?;
    page.push_str("</body>\n</html>\n");

    debug!(
        "Rendered page: {} skills, {} projects, {} bytes",
        config.skills.len(),
        config.projects.len(),
        page.len()
    );
    Ok(page)
}

/// Two-digit, one-based position label ("01", "02", ...).
pub fn ordinal_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Make JSON safe to place inside a `<script>` element.
fn embedded_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn write_head(out: &mut String, site: &SiteMetadata) -> FormatResult {
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\" />")?;
    writeln!(out, "<title>{}</title>", escape_html(&site.title))?;
    writeln!(
        out,
        "<meta name=\"description\" content=\"{}\" />",
        escape_html(&site.description)
    )?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />"
    )?;
    writeln!(
        out,
        "<link rel=\"icon\" href=\"{}\" />",
        escape_html(&site.favicon)
    )?;
    writeln!(
        out,
        "<link rel=\"stylesheet\" href=\"{STYLESHEET_FILE_NAME}\" />"
    )?;
    writeln!(out, "</head>")
}

fn write_nav(out: &mut String, site: &SiteMetadata) -> FormatResult {
    writeln!(out, "<nav class=\"{NAVBAR_CLASS}\">")?;
    writeln!(out, "<div class=\"logo\">{}</div>", escape_html(&site.brand))?;
    writeln!(out, "<ul class=\"nav-links\">")?;
    for section in SectionId::ALL {
        writeln!(
            out,
            "<li><a href=\"{}\">{}</a></li>",
            section.fragment(),
            section.nav_label()
        )?;
    }
    writeln!(out, "</ul>")?;
    writeln!(out, "</nav>")
}

fn write_hero(out: &mut String, hero: &Hero) -> FormatResult {
    writeln!(
        out,
        "<section id=\"{}\" class=\"{HERO_CLASS}\">",
        SectionId::Home.as_str()
    )?;
    writeln!(out, "<div class=\"hero-content\">")?;
    writeln!(out, "<h1>{}</h1>", escape_html(&hero.heading))?;
    writeln!(out, "<p class=\"subtitle\">{}</p>", escape_html(&hero.subtitle))?;
    writeln!(
        out,
        "<a href=\"{}\" class=\"cta-button\">{}</a>",
        SectionId::Contact.fragment(),
        escape_html(&hero.cta_label)
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

fn write_about(out: &mut String, about: &About) -> FormatResult {
    writeln!(
        out,
        "<section id=\"{}\" class=\"section\">",
        SectionId::About.as_str()
    )?;
    writeln!(
        out,
        "<h2 class=\"section-title\">{}</h2>",
        escape_html(&about.title)
    )?;
    writeln!(out, "<div class=\"about-content\">")?;
    for paragraph in &about.paragraphs {
        writeln!(
            out,
            "<p>{}</p>",
            highlight_phrases(paragraph, &about.highlights, HIGHLIGHT_CLASS)
        )?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

fn write_skills(out: &mut String, skills: &[Skill]) -> FormatResult {
    writeln!(
        out,
        "<section id=\"{}\" class=\"section section-alt\">",
        SectionId::Skills.as_str()
    )?;
    writeln!(out, "<h2 class=\"section-title\">Expertise</h2>")?;
    writeln!(out, "<div class=\"skills-grid\">")?;
    for (index, skill) in skills.iter().enumerate() {
        writeln!(out, "<div class=\"{SKILL_ITEM_CLASS}\">")?;
        writeln!(out, "<div class=\"skill-number\">{}</div>", ordinal_label(index))?;
        writeln!(out, "<h3 class=\"skill-name\">{}</h3>", escape_html(&skill.name))?;
        writeln!(
            out,
            "<p class=\"skill-description\">{}</p>",
            escape_html(&skill.description)
        )?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

fn write_projects(out: &mut String, projects: &[Project]) -> FormatResult {
    writeln!(
        out,
        "<section id=\"{}\" class=\"section\">",
        SectionId::Work.as_str()
    )?;
    writeln!(out, "<h2 class=\"section-title\">Selected Work</h2>")?;
    writeln!(out, "<div class=\"projects-grid\">")?;
    for (index, project) in projects.iter().enumerate() {
        writeln!(out, "<div class=\"{PROJECT_CARD_CLASS}\">")?;
        writeln!(
            out,
            "<div class=\"project-image\"><img src=\"{}\" alt=\"{}\" /></div>",
            escape_html(&project.image),
            escape_html(project.alt_text())
        )?;
        writeln!(out, "<div class=\"project-content\">")?;
        writeln!(out, "<div class=\"project-number\">{}</div>", ordinal_label(index))?;
        writeln!(
            out,
            "<h3 class=\"project-title\">{}</h3>",
            escape_html(&project.title)
        )?;
        writeln!(
            out,
            "<p class=\"project-description\">{}</p>",
            escape_html(&project.description)
        )?;
        let target = if project.open_in_new_tab {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        writeln!(
            out,
            "<a href=\"{}\"{target} class=\"project-link\">View Project</a>",
            escape_html(project.href())
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

fn write_contact(out: &mut String, contact: &ContactSection) -> FormatResult {
    writeln!(
        out,
        "<section id=\"{}\" class=\"section contact-section\">",
        SectionId::Contact.as_str()
    )?;
    writeln!(out, "<div class=\"contact-content\">")?;
    writeln!(
        out,
        "<h2 class=\"section-title\">{}</h2>",
        escape_html(&contact.title)
    )?;
    writeln!(
        out,
        "<h3 class=\"contact-title\">{}</h3>",
        escape_html(&contact.heading)
    )?;
    writeln!(out, "<div class=\"{CONTACT_FORM_CLASS}\">")?;
    for field in FormField::ALL {
        let name = field.as_str();
        writeln!(out, "<div class=\"form-group\">")?;
        writeln!(out, "<label for=\"{name}\">{}</label>", field.label())?;
        match field {
            FormField::Message => {
                writeln!(out, "<textarea id=\"{name}\" name=\"{name}\" required></textarea>")?
            }
            FormField::Email => writeln!(
                out,
                "<input type=\"email\" id=\"{name}\" name=\"{name}\" required />"
            )?,
            FormField::Name => writeln!(
                out,
                "<input type=\"text\" id=\"{name}\" name=\"{name}\" required />"
            )?,
        }
        writeln!(out, "</div>")?;
    }
    writeln!(
        out,
        "<button type=\"button\" id=\"{SUBMIT_BUTTON_ID}\" class=\"submit-button\">{}</button>",
        escape_html(&contact.submit_label)
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

fn write_footer(out: &mut String, site: &SiteMetadata) -> FormatResult {
    writeln!(out, "<footer>")?;
    writeln!(
        out,
        "<p>\u{a9} {} {}. ALL RIGHTS RESERVED.</p>",
        site.year,
        escape_html(&site.copyright_holder.to_uppercase())
    )?;
    writeln!(out, "</footer>")
}

fn write_scripts(out: &mut String, client_json: &str, script_literal: &str) -> FormatResult {
    writeln!(
        out,
        "<script id=\"{CLIENT_CONFIG_ELEMENT_ID}\" type=\"application/json\">{client_json}</script>"
    )?;
    writeln!(
        out,
        "<script type=\"module\">import init from {script_literal}; init();</script>"
    )
}
