use crate::gesture::classifier::GestureLabel;
use crate::gesture::poses::Pose;
use crate::hand_detector::interface::{DetectedHand, HandDetector};
use crate::library::logger::interface::Logger;
use image::RgbImage;
use rand::Rng;
use std::error::Error;
use std::sync::{Arc, Mutex};

const LABELS: [GestureLabel; 5] = [
    GestureLabel::OneFingerUp,
    GestureLabel::ThumbUp,
    GestureLabel::ThreeFingersUp,
    GestureLabel::AllFingersOpen,
    GestureLabel::Unknown,
];

struct Scene {
    hands: Vec<DetectedHand>,
    frames_left: u64,
}

/// Pretends a few students are raising hands. The same scene is reported for
/// `scene_frames` calls before a new one is drawn, so labels hold still long
/// enough to read.
pub struct HandDetectorFake {
    logger: Arc<dyn Logger + Send + Sync>,
    max_hands: usize,
    scene_frames: u64,
    scene: Mutex<Scene>,
}

impl HandDetectorFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, max_hands: usize, scene_frames: u64) -> Self {
        Self {
            logger: logger.with_namespace("hand_detector").with_namespace("fake"),
            max_hands,
            scene_frames,
            scene: Mutex::new(Scene {
                hands: vec![],
                frames_left: 0,
            }),
        }
    }

    fn random_scene(&self) -> Vec<DetectedHand> {
        let mut rng = rand::rng();
        let count = rng.random_range(0..=self.max_hands);

        (0..count)
            .map(|_| {
                let label = LABELS[rng.random_range(0..LABELS.len())];
                let wrist_x = rng.random_range(0.2..0.8);
                let wrist_y = rng.random_range(0.6..0.9);
                DetectedHand {
                    landmarks: Pose::archetype(label).landmarks(wrist_x, wrist_y),
                }
            })
            .collect()
    }
}

impl HandDetector for HandDetectorFake {
    fn detect(&self, _frame: &RgbImage) -> Result<Vec<DetectedHand>, Box<dyn Error + Send + Sync>> {
        let mut scene = self.scene.lock().map_err(|e| e.to_string())?;

        if scene.frames_left == 0 {
            scene.hands = self.random_scene();
            scene.frames_left = self.scene_frames.max(1);
            self.logger
                .info(&format!("New scene with {} hand(s)", scene.hands.len()))?;
        }
        scene.frames_left -= 1;

        Ok(scene.hands.clone())
    }
}
