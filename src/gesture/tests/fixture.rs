use crate::gesture::classifier::GestureLabel;
use crate::gesture::landmarks::{HandLandmarks, LandmarkPoint};
use crate::gesture::poses::Pose;
use rand::Rng;

pub const FRAME_WIDTH: u32 = 640;
pub const FRAME_HEIGHT: u32 = 480;

pub fn hand_for(label: GestureLabel) -> HandLandmarks {
    hand_for_pose(Pose::archetype(label))
}

pub fn hand_for_pose(pose: Pose) -> HandLandmarks {
    HandLandmarks::from_normalized(&pose.landmarks(0.5, 0.8), FRAME_WIDTH, FRAME_HEIGHT)
        .expect("archetype poses are in frame")
}

/// Every point scattered uniformly over the frame.
pub fn random_hand(rng: &mut impl Rng) -> HandLandmarks {
    let mut point = || LandmarkPoint {
        x: rng.random_range(0..FRAME_WIDTH as i32),
        y: rng.random_range(0..FRAME_HEIGHT as i32),
    };

    HandLandmarks {
        wrist: point(),
        thumb_cmc: point(),
        thumb_mcp: point(),
        thumb_ip: point(),
        thumb_tip: point(),
        index_mcp: point(),
        index_pip: point(),
        index_dip: point(),
        index_tip: point(),
        middle_mcp: point(),
        middle_pip: point(),
        middle_dip: point(),
        middle_tip: point(),
        ring_mcp: point(),
        ring_pip: point(),
        ring_dip: point(),
        ring_tip: point(),
        pinky_mcp: point(),
        pinky_pip: point(),
        pinky_dip: point(),
        pinky_tip: point(),
    }
}
