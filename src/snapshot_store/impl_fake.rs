use crate::snapshot_store::interface::SnapshotStore;
use image::RgbImage;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Mutex;

#[allow(dead_code)]
#[derive(Default)]
pub struct SnapshotStoreFake {
    saved: Mutex<Vec<(String, (u32, u32))>>,
    fail_with: Option<String>,
}

#[allow(dead_code)]
impl SnapshotStoreFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            saved: Mutex::new(vec![]),
            fail_with: Some(message.to_string()),
        }
    }

    /// Filenames and frame dimensions, in save order.
    pub fn saved(&self) -> Vec<(String, (u32, u32))> {
        self.saved.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl SnapshotStore for SnapshotStoreFake {
    fn save(
        &self,
        frame: &RgbImage,
        filename: &str,
    ) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone().into());
        }
        self.saved
            .lock()
            .map_err(|e| e.to_string())?
            .push((filename.to_string(), frame.dimensions()));
        Ok(PathBuf::from(filename))
    }
}
