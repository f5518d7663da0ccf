use image::RgbImage;
use std::error::Error;
use std::path::PathBuf;

pub trait SnapshotStore {
    /// Writes `frame` under `filename` and returns where it landed.
    fn save(&self, frame: &RgbImage, filename: &str)
        -> Result<PathBuf, Box<dyn Error + Send + Sync>>;
}
