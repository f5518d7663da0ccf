use super::main::Classroom;
use crate::classroom::core::{Effect, Msg, ProcessedFrame};
use crate::gesture::classifier::classify;
use crate::gesture::landmarks::HandLandmarks;
use std::error::Error;

impl Classroom {
    pub fn run_effect(&self, effect: Effect) -> Msg {
        match effect {
            Effect::StartCamera => Msg::CameraStartDone(self.device_camera.start()),
            Effect::ProcessFrame => Msg::FrameProcessDone(self.process_frame()),
            Effect::SaveCapture { image, record } => {
                let saved = self
                    .snapshot_store
                    .save(&image, &record.image_filename)
                    .and_then(|_| self.capture_log.append(&record))
                    .map(|()| record.image_filename.clone());
                if let Err(e) = &saved {
                    let _ = self.logger.error(&format!("Capture failed: {}", e));
                }
                Msg::CaptureDone(saved)
            }
            Effect::OpenFolder => {
                let opened = self.folder_opener.open(&self.config.capture_dir);
                if let Err(e) = &opened {
                    let _ = self.logger.error(&format!("Could not open folder: {}", e));
                }
                Msg::OpenFolderDone(opened)
            }
        }
    }

    fn process_frame(&self) -> Result<ProcessedFrame, Box<dyn Error + Send + Sync>> {
        let image = self.device_camera.capture_frame()?;
        let (width, height) = image.dimensions();
        let detections = self.hand_detector.detect(&image)?;

        let mut hands = Vec::with_capacity(detections.len());
        for (i, detected) in detections.iter().take(self.config.max_hands).enumerate() {
            match HandLandmarks::from_normalized(&detected.landmarks, width, height) {
                Ok(hand) => hands.push(hand),
                Err(e) => {
                    let _ = self.logger.error(&format!("Skipping hand {}: {}", i, e));
                }
            }
        }
        let labels = hands.iter().map(classify).collect();

        Ok(ProcessedFrame {
            image,
            hands,
            labels,
        })
    }
}
