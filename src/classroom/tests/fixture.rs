use crate::capture_log::impl_fake::CaptureLogFake;
use crate::classroom::main::Classroom;
use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_camera::interface::DeviceCamera;
use crate::folder_opener::impl_fake::FolderOpenerFake;
use crate::gesture::classifier::GestureLabel;
use crate::gesture::landmarks::NormalizedLandmark;
use crate::gesture::poses::Pose;
use crate::hand_detector::interface::{DetectedHand, HandDetector};
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use crate::snapshot_store::impl_fake::SnapshotStoreFake;
use image::RgbImage;
use std::error::Error;
use std::sync::{Arc, Mutex};

pub const FRAME_WIDTH: u32 = 320;
pub const FRAME_HEIGHT: u32 = 240;

/// Reports whatever hands the test last put in front of it.
#[derive(Default)]
pub struct HandDetectorScripted {
    hands: Mutex<Vec<DetectedHand>>,
}

impl HandDetectorScripted {
    pub fn show(&self, labels: &[GestureLabel]) {
        let hands = labels
            .iter()
            .enumerate()
            .map(|(i, label)| DetectedHand {
                landmarks: Pose::archetype(*label).landmarks(0.25 + 0.1 * i as f32, 0.8),
            })
            .collect();
        *self.hands.lock().unwrap() = hands;
    }

    pub fn show_raw(&self, hands: Vec<DetectedHand>) {
        *self.hands.lock().unwrap() = hands;
    }
}

impl HandDetector for HandDetectorScripted {
    fn detect(&self, _frame: &RgbImage) -> Result<Vec<DetectedHand>, Box<dyn Error + Send + Sync>> {
        Ok(self.hands.lock().unwrap().clone())
    }
}

pub struct DeviceCameraBroken;

impl DeviceCamera for DeviceCameraBroken {
    fn start(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Err("no device".into())
    }

    fn stop(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn capture_frame(&self) -> Result<RgbImage, Box<dyn Error + Send + Sync>> {
        Err("no device".into())
    }
}

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub hand_detector: Arc<HandDetectorScripted>,
    pub snapshot_store: Arc<SnapshotStoreFake>,
    pub capture_log: Arc<CaptureLogFake>,
    pub folder_opener: Arc<FolderOpenerFake>,
    pub classroom: Classroom,
}

impl Fixture {
    pub fn new() -> Self {
        Self::build(Config::default(), None, SnapshotStoreFake::new())
    }

    pub fn with_config(config: Config) -> Self {
        Self::build(config, None, SnapshotStoreFake::new())
    }

    pub fn with_broken_camera() -> Self {
        Self::build(
            Config::default(),
            Some(Arc::new(DeviceCameraBroken)),
            SnapshotStoreFake::new(),
        )
    }

    pub fn with_failing_snapshots() -> Self {
        Self::build(
            Config::default(),
            None,
            SnapshotStoreFake::failing("disk full"),
        )
    }

    fn build(
        config: Config,
        device_camera: Option<Arc<dyn DeviceCamera + Send + Sync>>,
        snapshot_store: SnapshotStoreFake,
    ) -> Self {
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(config.logger_timezone));
        let device_camera: Arc<dyn DeviceCamera + Send + Sync> = match device_camera {
            Some(device_camera) => device_camera,
            None => Arc::new(DeviceCameraFake::new(
                logger.clone(),
                FRAME_WIDTH,
                FRAME_HEIGHT,
            )),
        };
        let hand_detector = Arc::new(HandDetectorScripted::default());
        let snapshot_store = Arc::new(snapshot_store);
        let capture_log = Arc::new(CaptureLogFake::new());
        let folder_opener = Arc::new(FolderOpenerFake::new());

        let mut classroom = Classroom::new(
            config.clone(),
            logger.clone(),
            device_camera.clone(),
            hand_detector.clone(),
            snapshot_store.clone(),
            capture_log.clone(),
            folder_opener.clone(),
        );
        classroom.start();

        Self {
            config,
            logger,
            device_camera,
            hand_detector,
            snapshot_store,
            capture_log,
            folder_opener,
            classroom,
        }
    }
}

pub fn out_of_frame_hand() -> DetectedHand {
    DetectedHand {
        landmarks: vec![NormalizedLandmark::new(1.5, 0.5); 21],
    }
}
