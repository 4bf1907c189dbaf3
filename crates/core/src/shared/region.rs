/// The circular area darkened in one image.
///
/// Coordinates are in pixels with `center_x` along columns and
/// `center_y` along rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpotRegion {
    pub center_x: u32,
    pub center_y: u32,
    pub radius: u32,
    pub strength: u32,
}

/// Half-open pixel window `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl SpotRegion {
    pub fn new(center_x: u32, center_y: u32, radius: u32, strength: u32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            strength,
        }
    }

    /// Corners of the square that bounds the circle, clockwise from top-left.
    pub fn bounding_square(&self) -> [(i32, i32); 4] {
        let (cx, cy, r) = (
            self.center_x as i32,
            self.center_y as i32,
            self.radius as i32,
        );
        [
            (cx - r, cy - r),
            (cx + r, cy - r),
            (cx + r, cy + r),
            (cx - r, cy + r),
        ]
    }

    /// Pixels visited by the transform, clipped to a `width` x `height` image.
    ///
    /// The window ends one pixel short of `center + radius`, where the
    /// falloff is already zero.
    pub fn clipped_bounds(&self, width: u32, height: u32) -> PixelBounds {
        PixelBounds {
            x0: self.center_x.saturating_sub(self.radius),
            y0: self.center_y.saturating_sub(self.radius),
            x1: (self.center_x + self.radius).min(width),
            y1: (self.center_y + self.radius).min(height),
        }
    }

    /// Euclidean distance from the center to pixel (`col`, `row`).
    pub fn distance_to(&self, col: u32, row: u32) -> f64 {
        let dx = f64::from(self.center_x) - f64::from(col);
        let dy = f64::from(self.center_y) - f64::from(row);
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear falloff: full strength at the center, zero at or past the radius.
    pub fn falloff_at(&self, distance: f64) -> f64 {
        let radius = f64::from(self.radius);
        if radius <= 0.0 || distance >= radius {
            return 0.0;
        }
        (1.0 - distance / radius) * f64::from(self.strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn spot() -> SpotRegion {
        SpotRegion::new(100, 100, 50, 100)
    }

    #[test]
    fn test_falloff_full_strength_at_center() {
        assert_relative_eq!(spot().falloff_at(0.0), 100.0);
    }

    #[test]
    fn test_falloff_zero_at_radius() {
        assert_relative_eq!(spot().falloff_at(50.0), 0.0);
    }

    #[rstest]
    #[case::quarter(12.5, 75.0)]
    #[case::half(25.0, 50.0)]
    #[case::three_quarters(37.5, 25.0)]
    #[case::outside(51.0, 0.0)]
    fn test_falloff_is_linear(#[case] distance: f64, #[case] expected: f64) {
        assert_relative_eq!(spot().falloff_at(distance), expected);
    }

    #[test]
    fn test_falloff_zero_radius_is_noop() {
        let r = SpotRegion::new(10, 10, 0, 100);
        assert_relative_eq!(r.falloff_at(0.0), 0.0);
    }

    #[test]
    fn test_distance_to() {
        let r = spot();
        assert_relative_eq!(r.distance_to(100, 100), 0.0);
        assert_relative_eq!(r.distance_to(103, 104), 5.0);
        assert_relative_eq!(r.distance_to(100, 151), 51.0);
    }

    #[test]
    fn test_bounding_square_corners() {
        assert_eq!(
            spot().bounding_square(),
            [(50, 50), (150, 50), (150, 150), (50, 150)]
        );
    }

    #[test]
    fn test_clipped_bounds_inside_image() {
        let b = spot().clipped_bounds(200, 200);
        assert_eq!(
            b,
            PixelBounds {
                x0: 50,
                y0: 50,
                x1: 150,
                y1: 150
            }
        );
    }

    #[test]
    fn test_clipped_bounds_at_image_edges() {
        let r = SpotRegion::new(10, 190, 40, 100);
        let b = r.clipped_bounds(120, 200);
        assert_eq!(b.x0, 0);
        assert_eq!(b.y0, 150);
        assert_eq!(b.x1, 50);
        assert_eq!(b.y1, 200);
    }
}
