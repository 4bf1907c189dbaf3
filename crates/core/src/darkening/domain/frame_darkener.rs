use crate::shared::frame::Frame;
use crate::shared::region::SpotRegion;

use super::darken_error::DarkenError;

/// Domain interface for darkening a spot within a frame.
///
/// Implementations modify the frame in-place (`&mut Frame`) and return the
/// region they applied.
pub trait FrameDarkener: Send {
    fn darken(&mut self, frame: &mut Frame) -> Result<SpotRegion, DarkenError>;
}
