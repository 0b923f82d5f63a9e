use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for face detection on a single-channel image.
///
/// Regions come back in the detector's own order; callers number faces by
/// that order and do not deduplicate overlaps.
pub trait FaceDetector {
    fn detect(&mut self, gray: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
