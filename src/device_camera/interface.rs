use image::RgbImage;
use std::error::Error;

pub trait DeviceCamera {
    fn start(&self) -> Result<(), Box<dyn Error + Send + Sync>>;
    fn stop(&self) -> Result<(), Box<dyn Error + Send + Sync>>;
    /// The raw frame, without any overlay drawn on it.
    fn capture_frame(&self) -> Result<RgbImage, Box<dyn Error + Send + Sync>>;
}
