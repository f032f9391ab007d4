use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Unknown Field Error: {name} {location}")]
    UnknownField {
        name: String,
        location: ErrorLocation,
    },
}
