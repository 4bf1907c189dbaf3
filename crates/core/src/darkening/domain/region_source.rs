use crate::shared::region::SpotRegion;

use super::darken_error::DarkenError;

/// Domain interface for choosing where and how hard to darken an image.
///
/// Implementations may be randomized; they must fail with
/// [`DarkenError::InvalidImageDimensions`] instead of returning a region
/// that does not fit the requested dimensions.
pub trait RegionSource: Send {
    fn next_region(&mut self, width: u32, height: u32) -> Result<SpotRegion, DarkenError>;
}

/// Always yields the same region, regardless of image size.
pub struct FixedRegionSource {
    region: SpotRegion,
}

impl FixedRegionSource {
    pub fn new(region: SpotRegion) -> Self {
        Self { region }
    }
}

impl RegionSource for FixedRegionSource {
    fn next_region(&mut self, _width: u32, _height: u32) -> Result<SpotRegion, DarkenError> {
        Ok(self.region)
    }
}
