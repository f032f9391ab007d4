use common::ErrorLocation;
use portfolio_core::CoreError;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the `portfolio` command line.
///
/// Core errors are flattened to their message so the value stays
/// serializable for `check --json`. The location is kept.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum PortfolioError {
    /// Error from this app (logging setup, output directories)
    #[error("Portfolio Error: {message} {location}")]
    Portfolio {
        message: String,
        location: ErrorLocation,
    },

    /// Error from portfolio-core (config, render, site output)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for PortfolioError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        PortfolioError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
