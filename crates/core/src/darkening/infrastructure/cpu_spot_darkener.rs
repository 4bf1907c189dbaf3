use ndarray::s;

use crate::darkening::domain::darken_error::DarkenError;
use crate::darkening::domain::frame_darkener::FrameDarkener;
use crate::darkening::domain::region_source::RegionSource;
use crate::shared::frame::Frame;
use crate::shared::region::SpotRegion;

use super::polygon_mask::PolygonMask;

/// CPU darkener: asks its [`RegionSource`] for a spot, then applies it.
pub struct CpuSpotDarkener<S> {
    source: S,
}

impl<S: RegionSource> CpuSpotDarkener<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: RegionSource> FrameDarkener for CpuSpotDarkener<S> {
    fn darken(&mut self, frame: &mut Frame) -> Result<SpotRegion, DarkenError> {
        let region = self.source.next_region(frame.width(), frame.height())?;
        apply_spot_darkening(frame, &region)?;
        Ok(region)
    }
}

/// Darkens `frame` in place with a linear radial falloff around `region`.
///
/// Only pixels inside both the bounding-square mask and the open circle
/// of `region.radius` change. Each channel drops by
/// `(1 - d / radius) * strength`, floored at zero and truncated to `u8`.
pub fn apply_spot_darkening(frame: &mut Frame, region: &SpotRegion) -> Result<(), DarkenError> {
    let (width, height) = (frame.width(), frame.height());
    if width == 0 || height == 0 {
        return Err(DarkenError::invalid_dimensions(
            width,
            height,
            "frame has no pixels",
        ));
    }
    if region.radius == 0 {
        return Ok(());
    }

    let mask = PolygonMask::bounding_square(width, height, region);
    let bounds = region.clipped_bounds(width, height);
    let radius = f64::from(region.radius);
    let mut pixels = frame.as_ndarray_mut();

    for row in bounds.y0..bounds.y1 {
        for col in bounds.x0..bounds.x1 {
            if !mask.contains(col, row) {
                continue;
            }
            let distance = region.distance_to(col, row);
            if distance >= radius {
                continue;
            }
            let falloff = region.falloff_at(distance);
            pixels
                .slice_mut(s![row as usize, col as usize, ..])
                .mapv_inplace(|v| darken_channel(v, falloff));
        }
    }

    Ok(())
}

fn darken_channel(value: u8, falloff: f64) -> u8 {
    (f64::from(value) - falloff).max(0.0) as u8
}
