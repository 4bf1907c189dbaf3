use std::path::PathBuf;

use thiserror::Error;

use crate::darkening::domain::darken_error::DarkenError;

use super::image_state::ImageState;

/// Fatal errors that abort a whole batch run.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to read input list {path}: {source}")]
    ListFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-image errors; retried, then reported without aborting the batch.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error>,
    },
    #[error(transparent)]
    Darken(#[from] DarkenError),
    #[error("failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error>,
    },
}

impl ProcessError {
    /// The state the image was in when this error occurred.
    pub fn state(&self) -> ImageState {
        match self {
            Self::Load { .. } => ImageState::Loading,
            Self::Darken(_) => ImageState::Transforming,
            Self::Save { .. } => ImageState::Saving,
        }
    }
}
