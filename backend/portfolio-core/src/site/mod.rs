//! Static site output.

use crate::config::SiteConfig;
use crate::error::site::SiteError;
use crate::render::{STYLESHEET, STYLESHEET_FILE_NAME, render_page};

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::info;

pub const INDEX_FILE_NAME: &str = "index.html";

/// Files produced by [`write_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub index_path: PathBuf,
    pub stylesheet_path: PathBuf,
    pub bytes_written: usize,
}

/// Render `config` and write `index.html` plus the stylesheet into `out_dir`.
///
/// Each file is written to a temp file first and renamed into place, so a
/// crash never leaves a half-written page behind.
///
/// # Errors
///
/// Returns [`SiteError`] if:
/// - Rendering fails
/// - Directory creation fails
/// - Write or rename fails
pub fn write_site(config: &SiteConfig, out_dir: &Path) -> Result<SiteReport, SiteError> {
    let page = render_page(config).map_err(|e| SiteError::RenderError {
        location: ErrorLocation::from(Location::caller()),
        source: e,
    })?;

    std::fs::create_dir_all(out_dir).map_err(|e| SiteError::WriteError {
        location: ErrorLocation::from(Location::caller()),
        path: out_dir.to_path_buf(),
        source: e,
    })?;

    let index_path = write_atomic(out_dir, INDEX_FILE_NAME, &page)?;
    let stylesheet_path = write_atomic(out_dir, STYLESHEET_FILE_NAME, STYLESHEET)?;

    let report = SiteReport {
        index_path,
        stylesheet_path,
        bytes_written: page.len() + STYLESHEET.len(),
    };

    info!(
        "Site written to {} ({} bytes)",
        out_dir.display(),
        report.bytes_written
    );
    Ok(report)
}

fn write_atomic(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, SiteError> {
    let final_path = dir.join(file_name);
    let temp_path = dir.join(format!("{file_name}.tmp"));

    std::fs::write(&temp_path, contents).map_err(|e| SiteError::WriteError {
        location: ErrorLocation::from(Location::caller()),
        path: temp_path.clone(),
        source: e,
    })?;

    std::fs::rename(&temp_path, &final_path).map_err(|e| SiteError::WriteError {
        location: ErrorLocation::from(Location::caller()),
        path: final_path.clone(),
        source: e,
    })?;

    Ok(final_path)
}
