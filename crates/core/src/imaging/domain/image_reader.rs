use std::path::Path;

use crate::shared::frame::Frame;

/// Decodes an image file into an RGB frame.
///
/// Every call decodes from the source again; implementations keep no cache.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>>;
}
