use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::{Rgb, RgbImage};
use std::error::Error;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

/// Produces a slowly scrolling gradient so the preview visibly moves.
pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    width: u32,
    height: u32,
    started: AtomicBool,
    frame_count: AtomicU32,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, width: u32, height: u32) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            width,
            height,
            started: AtomicBool::new(false),
            frame_count: AtomicU32::new(0),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        self.started.store(true, Ordering::SeqCst);
        self.logger
            .info(&format!("Camera started ({}x{})", self.width, self.height))?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.started.store(false, Ordering::SeqCst);
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<RgbImage, Box<dyn Error + Send + Sync>> {
        if !self.started.load(Ordering::SeqCst) {
            return Err("Camera not started".into());
        }

        let shift = self.frame_count.fetch_add(1, Ordering::SeqCst);
        let tint = rand::random::<u8>() / 16;

        let frame = RgbImage::from_fn(self.width, self.height, |x, y| {
            let v = ((x + y + shift) % 256) as u8;
            Rgb([v / 2 + tint, v / 3 + 40, 96])
        });

        Ok(frame)
    }
}
