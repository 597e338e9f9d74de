//! Error taxonomy for writer operations

use thiserror::Error;

use crate::image::ImageError;

#[derive(Debug, Error)]
pub enum WriteError {
    /// No loaded writer claims the target
    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    /// The resolved writer cannot perform the requested operation
    #[error("{format} writer does not support {detail}")]
    Unsupported {
        format: &'static str,
        detail: &'static str,
    },

    /// Input data could not be decoded
    #[error("malformed {format} data: {detail}")]
    Malformed {
        format: &'static str,
        detail: String,
    },

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
