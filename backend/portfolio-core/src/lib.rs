//! Core logic for the portfolio site.
//!
//! - [`scroll`]: the scroll controller (smooth in-page anchors, staggered reveals)
//! - [`form`]: the contact form stub
//! - [`config`]: site configuration loaded from `portfolio.toml`
//! - [`render`]: the single page template
//! - [`site`]: writing the rendered site to disk
//!
//! Nothing in here touches a real browser. Hosts plug in through the traits in
//! [`scroll::surface`] and [`form::Notifier`].

pub mod config;
pub mod error;
pub mod form;
pub mod render;
pub mod scroll;
pub mod site;

#[cfg(test)]
mod tests;

pub use config::SiteConfig;
pub use error::CoreError;
pub use form::{ContactForm, Notifier};
pub use scroll::{AnchorOutcome, IntersectionEntry, ScrollController};

/// Name of the configuration file looked up in a config directory.
pub const CONFIG_FILE_NAME: &str = "portfolio.toml";
