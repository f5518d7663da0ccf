use crate::library::logger::interface::Logger;
use crate::snapshot_store::interface::SnapshotStore;
use image::{ImageFormat, RgbImage};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

pub struct SnapshotStoreFs {
    logger: Arc<dyn Logger + Send + Sync>,
    dir: PathBuf,
}

impl SnapshotStoreFs {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, dir: PathBuf) -> Self {
        Self {
            logger: logger.with_namespace("snapshot_store").with_namespace("fs"),
            dir,
        }
    }
}

impl SnapshotStore for SnapshotStoreFs {
    fn save(
        &self,
        frame: &RgbImage,
        filename: &str,
    ) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);

        frame.save_with_format(&path, ImageFormat::Jpeg)?;

        self.logger
            .info(&format!("Saved snapshot {}", path.display()))?;
        Ok(path)
    }
}
