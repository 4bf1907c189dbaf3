use image::{GrayImage, Luma};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

use crate::shared::region::SpotRegion;

const SET: Luma<u8> = Luma([255]);

/// Binary mask of a filled polygon, sized to match a frame.
///
/// Vertices may lie outside the frame; the fill is clipped.
pub struct PolygonMask {
    mask: GrayImage,
}

impl PolygonMask {
    pub fn from_polygon(width: u32, height: u32, vertices: &[(i32, i32)]) -> Self {
        let mut mask = GrayImage::new(width, height);

        let mut points: Vec<Point<i32>> = vertices.iter().map(|&(x, y)| Point::new(x, y)).collect();
        // imageproc closes the polygon itself and rejects an explicit closing vertex
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() >= 3 && width > 0 && height > 0 {
            draw_polygon_mut(&mut mask, &points, SET);
        }

        Self { mask }
    }

    /// Mask of the square bounding `region`'s circle.
    pub fn bounding_square(width: u32, height: u32, region: &SpotRegion) -> Self {
        Self::from_polygon(width, height, &region.bounding_square())
    }

    pub fn contains(&self, col: u32, row: u32) -> bool {
        col < self.mask.width() && row < self.mask.height() && self.mask.get_pixel(col, row)[0] != 0
    }

    pub fn count_set(&self) -> usize {
        self.mask.pixels().filter(|p| p[0] != 0).count()
    }
}
