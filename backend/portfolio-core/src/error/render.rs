use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RenderError {
    #[error("Format Error: {message} {location}")]
    Format {
        message: String,
        location: ErrorLocation,
    },

    #[error("Client Config Error: {message} {location}")]
    ClientConfig {
        message: String,
        location: ErrorLocation,
    },
}

impl From<std::fmt::Error> for RenderError {
    #[track_caller]
    fn from(error: std::fmt::Error) -> Self {
        RenderError::Format {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        RenderError::ClientConfig {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
