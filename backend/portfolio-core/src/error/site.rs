use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Site Write Error: {path}: {source} {location}")]
    WriteError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Site Render Error: {source} {location}")]
    RenderError {
        location: ErrorLocation,
        #[source]
        source: super::render::RenderError,
    },
}
