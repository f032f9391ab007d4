//! Domain models for the portfolio site.
//!
//! This crate contains pure data structures: form state, the markup markers
//! shared between the renderer and the browser host, page content, and the
//! reveal options. Models have no business logic beyond small accessors.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **portfolio-core**: Controller, form, configuration and rendering
//! - **portfolio** / **portfolio-web**: CLI and browser hosts wiring it together

pub mod content;
pub mod error;
pub mod form_state;
pub mod markers;
pub mod reveal;

pub use common::ErrorLocation;
pub use content::{About, ContactSection, Hero, Project, SiteMetadata, Skill};
pub use error::model_error::ModelError;
pub use form_state::{FormField, FormState};
pub use markers::SectionId;
pub use reveal::RevealOptions;

#[cfg(test)]
mod tests;
