pub mod config;
pub mod render;
pub mod site;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Render(#[from] render::RenderError),

    #[error(transparent)]
    Site(#[from] site::SiteError),
}
