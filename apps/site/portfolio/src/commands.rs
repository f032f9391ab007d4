//! Command implementations. Each returns the text to print on stdout.

use crate::cli::{Cli, Command};
use crate::error::PortfolioError;

use common::ErrorLocation;
use portfolio_core::render::render_page;
use portfolio_core::site::write_site;
use portfolio_core::{CoreError, SiteConfig};

use std::panic::Location;
use std::path::Path;

use log::info;
use serde::Serialize;

/// Summary printed by `check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub status: &'static str,
    pub title: String,
    pub skills: usize,
    pub projects: usize,
}

pub fn run(cli: &Cli) -> Result<String, PortfolioError> {
    let config = load_config(&cli.config)?;

    match &cli.command {
        Command::Build { out } => build(&config, out),
        Command::Render => render_page(&config)
            .map_err(|e| PortfolioError::from(CoreError::from(e))),
        Command::Check { json } => check(&config, *json),
    }
}

pub fn load_config(path: &Path) -> Result<SiteConfig, PortfolioError> {
    SiteConfig::load_file(path).map_err(|e| PortfolioError::from(CoreError::from(e)))
}

fn build(config: &SiteConfig, out: &Path) -> Result<String, PortfolioError> {
    let report = write_site(config, out).map_err(|e| PortfolioError::from(CoreError::from(e)))?;
    info!("Build finished: {}", report.index_path.display());

    Ok(format!(
        "Wrote {} and {} ({} bytes)",
        report.index_path.display(),
        report.stylesheet_path.display(),
        report.bytes_written
    ))
}

fn check(config: &SiteConfig, json: bool) -> Result<String, PortfolioError> {
    let report = CheckReport {
        status: "ok",
        title: config.site.title.clone(),
        skills: config.skills.len(),
        projects: config.projects.len(),
    };

    if json {
        return serde_json::to_string_pretty(&report).map_err(|e| PortfolioError::Portfolio {
            message: format!("Failed to serialize check report: {e}"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(format!(
        "OK: '{}' with {} skills and {} projects",
        report.title, report.skills, report.projects
    ))
}
