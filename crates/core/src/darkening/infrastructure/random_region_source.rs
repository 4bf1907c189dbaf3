use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::darkening::domain::darken_error::DarkenError;
use crate::darkening::domain::region_source::RegionSource;
use crate::shared::constants::{MAX_STRENGTH, MIN_RADIUS, MIN_STRENGTH, RADIUS_DIVISOR};
use crate::shared::region::SpotRegion;

/// Draws spot parameters uniformly from the effect's fixed ranges.
///
/// Draw order is radius, center x, center y, strength. The radius range
/// can exceed half the short side, in which case no center fits and the
/// draw fails; a later draw may pick a smaller radius.
pub struct RandomRegionSource<R> {
    rng: R,
}

impl<R: Rng + Send> RandomRegionSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomRegionSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> RegionSource for RandomRegionSource<R> {
    fn next_region(&mut self, width: u32, height: u32) -> Result<SpotRegion, DarkenError> {
        let max_radius = radius_upper_bound(width, height);
        if max_radius <= MIN_RADIUS {
            return Err(DarkenError::invalid_dimensions(
                width,
                height,
                format!("radius range [{MIN_RADIUS}, {max_radius}) is empty"),
            ));
        }
        let radius = self.rng.gen_range(MIN_RADIUS..max_radius);

        let center_x = sample_center(&mut self.rng, radius, width).ok_or_else(|| {
            DarkenError::invalid_dimensions(
                width,
                height,
                format!("no horizontal center fits radius {radius}"),
            )
        })?;
        let center_y = sample_center(&mut self.rng, radius, height).ok_or_else(|| {
            DarkenError::invalid_dimensions(
                width,
                height,
                format!("no vertical center fits radius {radius}"),
            )
        })?;
        let strength = self.rng.gen_range(MIN_STRENGTH..MAX_STRENGTH);

        Ok(SpotRegion::new(center_x, center_y, radius, strength))
    }
}

/// Exclusive upper bound of the radius range: `floor(min(w, h) / 1.5)`.
pub fn radius_upper_bound(width: u32, height: u32) -> u32 {
    (f64::from(width.min(height)) / RADIUS_DIVISOR).floor() as u32
}

/// Uniform center in `[radius, extent - radius)`, or `None` when empty.
fn sample_center<R: Rng>(rng: &mut R, radius: u32, extent: u32) -> Option<u32> {
    let upper = extent.checked_sub(radius)?;
    if radius < upper {
        Some(rng.gen_range(radius..upper))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::minimum_plausible(60, 60)]
    #[case::narrow(300, 60)]
    #[case::tiny(10, 10)]
    #[case::empty(0, 0)]
    fn test_too_small_is_invalid_dimensions(#[case] width: u32, #[case] height: u32) {
        let mut source = RandomRegionSource::seeded(7);
        let err = source.next_region(width, height).unwrap_err();
        assert!(matches!(err, DarkenError::InvalidImageDimensions { .. }));
    }

    #[test]
    fn test_radius_upper_bound_uses_short_side() {
        assert_eq!(radius_upper_bound(60, 60), 40);
        assert_eq!(radius_upper_bound(200, 90), 60);
        assert_eq!(radius_upper_bound(200, 200), 133);
    }

    #[test]
    fn test_radius_too_large_for_any_center_fails() {
        // radius range is [40, 41) but a 62px side only fits centers
        // for radii below 31
        let mut source = RandomRegionSource::seeded(1);
        for _ in 0..20 {
            assert!(source.next_region(62, 62).is_err());
        }
    }

    #[test]
    fn test_regions_stay_within_documented_ranges() {
        let (width, height) = (300, 200);
        let mut source = RandomRegionSource::seeded(42);
        let mut successes = 0;
        for _ in 0..500 {
            match source.next_region(width, height) {
                Ok(r) => {
                    successes += 1;
                    assert!(r.radius >= MIN_RADIUS && r.radius < radius_upper_bound(width, height));
                    assert!(r.center_x >= r.radius && r.center_x < width - r.radius);
                    assert!(r.center_y >= r.radius && r.center_y < height - r.radius);
                    assert!(r.strength >= MIN_STRENGTH && r.strength < MAX_STRENGTH);
                }
                Err(e) => assert!(matches!(e, DarkenError::InvalidImageDimensions { .. })),
            }
        }
        assert!(successes > 0);
    }

    #[test]
    fn test_same_seed_same_regions() {
        let mut a = RandomRegionSource::seeded(99);
        let mut b = RandomRegionSource::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.next_region(400, 400), b.next_region(400, 400));
        }
    }
}
