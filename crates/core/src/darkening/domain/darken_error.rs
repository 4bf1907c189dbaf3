use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DarkenError {
    #[error("image {width}x{height} is too small for a spot: {reason}")]
    InvalidImageDimensions {
        width: u32,
        height: u32,
        reason: String,
    },
}

impl DarkenError {
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidImageDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
