use ndarray::{ArrayView3, ArrayViewMut3};

/// Number of interleaved channels in every frame (R, G, B).
pub const CHANNELS: usize = 3;

/// A decoded image: contiguous RGB bytes in row-major order.
///
/// Color conversion happens at I/O boundaries only; the effect engine
/// sees the same channel order for every input format.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// A frame with every channel of every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self::new(
            vec![value; (width as usize) * (height as usize) * CHANNELS],
            width,
            height,
        )
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel values of the pixel at (`row`, `col`).
    pub fn pixel(&self, row: u32, col: u32) -> [u8; CHANNELS] {
        let offset = ((row as usize) * (self.width as usize) + col as usize) * CHANNELS;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    fn test_filled_sets_every_channel() {
        let frame = Frame::filled(3, 2, 255);
        assert_eq!(frame.data().len(), 18);
        assert!(frame.data().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_clone_is_independent() {
        let frame = Frame::filled(2, 2, 100);
        let mut cloned = frame.clone();
        cloned.data_mut()[0] = 0;
        assert_eq!(frame.data()[0], 100);
        assert_eq!(cloned.data()[0], 0);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 3")]
    fn test_mismatched_data_length_panics_in_debug() {
        Frame::new(vec![0u8; 10], 2, 2);
    }

    #[test]
    fn test_pixel_addresses_row_then_column() {
        // 2 rows x 3 cols; mark row=1, col=2
        let mut data = vec![0u8; 18];
        let offset = (3 + 2) * CHANNELS;
        data[offset..offset + 3].copy_from_slice(&[1, 2, 3]);
        let frame = Frame::new(data, 3, 2);
        assert_eq!(frame.pixel(1, 2), [1, 2, 3]);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_as_ndarray_shape() {
        let frame = Frame::filled(4, 2, 0);
        assert_eq!(frame.as_ndarray().shape(), &[2, 4, 3]); // (height, width, channels)
    }

    #[test]
    fn test_as_ndarray_mut_modification() {
        let mut frame = Frame::filled(2, 2, 0);
        {
            let mut arr = frame.as_ndarray_mut();
            arr[[0, 1, 2]] = 128; // row=0, col=1, B channel
        }
        assert_eq!(frame.as_ndarray()[[0, 1, 2]], 128);
        assert_eq!(frame.pixel(0, 1), [0, 0, 128]);
    }
}
