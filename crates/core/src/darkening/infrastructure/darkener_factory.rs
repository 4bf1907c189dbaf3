use crate::darkening::domain::frame_darkener::FrameDarkener;

use super::cpu_spot_darkener::CpuSpotDarkener;
use super::random_region_source::RandomRegionSource;

/// Creates the spot darkener used by batch runs.
///
/// A seed makes region selection reproducible across runs; without one
/// the generator is seeded from OS entropy.
pub fn create_darkener(seed: Option<u64>) -> Box<dyn FrameDarkener> {
    match seed {
        Some(seed) => {
            log::info!("Using seeded region selection (seed={seed})");
            Box::new(CpuSpotDarkener::new(RandomRegionSource::seeded(seed)))
        }
        None => {
            log::debug!("Using entropy-seeded region selection");
            Box::new(CpuSpotDarkener::new(RandomRegionSource::from_entropy()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::frame::Frame;

    fn darken_until_applied(darkener: &mut dyn FrameDarkener, frame: &Frame) -> Frame {
        for _ in 0..50 {
            let mut candidate = frame.clone();
            if darkener.darken(&mut candidate).is_ok() {
                return candidate;
            }
        }
        panic!("no region fit in 50 draws");
    }

    #[test]
    fn test_seeded_darkeners_agree() {
        let frame = Frame::filled(300, 300, 200);
        let mut a = create_darkener(Some(17));
        let mut b = create_darkener(Some(17));
        assert_eq!(
            darken_until_applied(a.as_mut(), &frame),
            darken_until_applied(b.as_mut(), &frame)
        );
    }

    #[test]
    fn test_unseeded_darkener_darkens() {
        let frame = Frame::filled(300, 300, 200);
        let mut darkener = create_darkener(None);
        let out = darken_until_applied(darkener.as_mut(), &frame);
        assert_ne!(out, frame);
    }
}
