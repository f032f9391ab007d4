pub mod client;
mod defaults;

pub use client::ClientConfig;

use crate::CONFIG_FILE_NAME;
use crate::error::config::ConfigError;

use common::ErrorLocation;
use models::{About, ContactSection, Hero, Project, RevealOptions, SiteMetadata, Skill};

use std::collections::HashSet;
use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_VERSION: u32 = 1;

/// Largest accepted per-rank reveal delay.
const MAX_STAGGER_MS: u64 = 10_000;

/// Base used to resolve relative project links during validation.
const LINK_BASE_URL: &str = "https://portfolio.invalid/";

// ============================================
// CONFIG STRUCTS
// ============================================

/// Where the rendered page finds its browser bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_script_src")]
    pub script_src: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            script_src: default_script_src(),
        }
    }
}

/// Everything needed to render the portfolio page.
///
/// Every table is optional in `portfolio.toml`; a missing table falls back to
/// the canonical content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "defaults::site")]
    pub site: SiteMetadata,

    #[serde(default = "defaults::hero")]
    pub hero: Hero,

    #[serde(default = "defaults::about")]
    pub about: About,

    #[serde(default = "defaults::skills")]
    pub skills: Vec<Skill>,

    #[serde(default = "defaults::projects")]
    pub projects: Vec<Project>,

    #[serde(default = "defaults::contact")]
    pub contact: ContactSection,

    #[serde(default)]
    pub reveal: RevealOptions,

    #[serde(default)]
    pub assets: AssetsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            site: defaults::site(),
            hero: defaults::hero(),
            about: defaults::about(),
            skills: defaults::skills(),
            projects: defaults::projects(),
            contact: defaults::contact(),
            reveal: RevealOptions::default(),
            assets: AssetsConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_script_src() -> String {
    "./pkg/portfolio_web.js".to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl SiteConfig {
    /// Load config from {config_dir}/portfolio.toml.
    ///
    /// # Returns
    ///
    /// Returns `Ok(SiteConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        Self::load_file(&config_dir.join(CONFIG_FILE_NAME))
    }

    /// Load config from an explicit file path.
    ///
    /// A missing file is not an error: the canonical content is used instead.
    pub fn load_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.to_path_buf(),
                source: e,
            }
        })?;

        let config = Self::from_toml(&contents, config_path)?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Parse and validate TOML text. `origin` is only used in error messages.
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(contents).map_err(|e| {
            warn!("Failed to parse config TOML: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: origin.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Settings forwarded to the browser host.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            reveal: self.reveal.clone(),
            confirmation: self.contact.confirmation.clone(),
        }
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(validation_error(format!(
                "Invalid version: {} (expected 1-{})",
                self.version, CONFIG_VERSION
            )));
        }

        if self.site.title.trim().is_empty() {
            return Err(validation_error("site.title cannot be empty".to_string()));
        }

        if self.skills.is_empty() {
            return Err(validation_error(
                "At least one skill is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for skill in &self.skills {
            if skill.name.trim().is_empty() {
                return Err(validation_error("Skill name cannot be empty".to_string()));
            }
            if !seen.insert(skill.name.as_str()) {
                return Err(validation_error(format!(
                    "Duplicate skill: {}",
                    skill.name
                )));
            }
        }

        let base = Url::parse(LINK_BASE_URL).map_err(|e| validation_error(e.to_string()))?;
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err(validation_error(
                    "Project title cannot be empty".to_string(),
                ));
            }

            if let Some(ref link) = project.link {
                if link.trim().is_empty() {
                    return Err(validation_error(format!(
                        "Link of project '{}' cannot be empty string",
                        project.title
                    )));
                }

                base.join(link).map_err(|e| {
                    validation_error(format!(
                        "Invalid link for project '{}': {} ({})",
                        project.title, link, e
                    ))
                })?;
            }
        }

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(validation_error(format!(
                "Invalid reveal threshold: {} (must be 0.0-1.0)",
                self.reveal.threshold
            )));
        }

        if self.reveal.stagger_ms > MAX_STAGGER_MS {
            return Err(validation_error(format!(
                "Invalid reveal stagger: {}ms (must be at most {}ms)",
                self.reveal.stagger_ms, MAX_STAGGER_MS
            )));
        }

        if self.reveal.revealed_class.trim().is_empty()
            || self.reveal.revealed_class.contains(char::is_whitespace)
        {
            return Err(validation_error(format!(
                "Invalid revealed class: '{}'",
                self.reveal.revealed_class
            )));
        }

        Ok(())
    }
}

#[track_caller]
fn validation_error(reason: String) -> ConfigError {
    ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason,
    }
}
