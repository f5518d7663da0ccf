use crate::gesture::landmarks::NormalizedLandmark;
use image::RgbImage;
use std::error::Error;

/// One hand as reported by a landmark detector, in detector index order.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedHand {
    pub landmarks: Vec<NormalizedLandmark>,
}

pub trait HandDetector {
    fn detect(&self, frame: &RgbImage) -> Result<Vec<DetectedHand>, Box<dyn Error + Send + Sync>>;
}
