//! Synthetic hand poses in detector (normalized) space.
//!
//! The fake detector draws from these, and tests use them to build landmark
//! sets without hand-writing 21 coordinates.

use crate::gesture::classifier::GestureLabel;
use crate::gesture::landmarks::NormalizedLandmark;

/// Which digits point up. Fingers that are not up are curled with the tip
/// below the PIP joint; a thumb that is not up has its tip below the IP joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    pub thumb_up: bool,
    pub index_up: bool,
    pub middle_up: bool,
    pub ring_up: bool,
    pub pinky_up: bool,
}

const FINGER_COLUMNS: [f32; 4] = [-0.06, -0.02, 0.02, 0.06];
const THUMB_COLUMN: f32 = -0.12;

// (mcp, pip, dip, tip) y offsets from the wrist
const FINGER_EXTENDED: [f32; 4] = [-0.10, -0.15, -0.19, -0.23];
const FINGER_CURLED: [f32; 4] = [-0.10, -0.14, -0.11, -0.09];

// (cmc, mcp, ip, tip)
const THUMB_EXTENDED: [f32; 4] = [-0.03, -0.06, -0.09, -0.13];
const THUMB_FOLDED: [f32; 4] = [-0.03, -0.06, -0.09, -0.07];

const POSE_SCALE: f32 = 1.5;

impl Pose {
    pub const FIST: Pose = Pose {
        thumb_up: false,
        index_up: false,
        middle_up: false,
        ring_up: false,
        pinky_up: false,
    };

    /// A pose the classifier resolves to `label`.
    pub fn archetype(label: GestureLabel) -> Pose {
        match label {
            GestureLabel::ThumbUp => Pose {
                thumb_up: true,
                ..Pose::FIST
            },
            GestureLabel::OneFingerUp => Pose {
                index_up: true,
                ..Pose::FIST
            },
            GestureLabel::ThreeFingersUp => Pose {
                index_up: true,
                middle_up: true,
                ring_up: true,
                ..Pose::FIST
            },
            GestureLabel::AllFingersOpen => Pose {
                thumb_up: true,
                index_up: true,
                middle_up: true,
                ring_up: true,
                pinky_up: true,
            },
            GestureLabel::Unknown => Pose::FIST,
        }
    }

    /// Lays the pose out with the wrist at (`wrist_x`, `wrist_y`). Keep the
    /// wrist within `[0.2, 0.8] x [0.4, 0.9]` for every point to stay in frame.
    pub fn landmarks(&self, wrist_x: f32, wrist_y: f32) -> Vec<NormalizedLandmark> {
        let at = |dx: f32, dy: f32| {
            NormalizedLandmark::new(wrist_x + dx * POSE_SCALE, wrist_y + dy * POSE_SCALE)
        };

        let mut points = Vec::with_capacity(21);
        points.push(at(0.0, 0.0));

        let thumb = if self.thumb_up {
            THUMB_EXTENDED
        } else {
            THUMB_FOLDED
        };
        points.extend(thumb.iter().map(|dy| at(THUMB_COLUMN, *dy)));

        let fingers = [self.index_up, self.middle_up, self.ring_up, self.pinky_up];
        for (up, column) in fingers.iter().zip(FINGER_COLUMNS) {
            let chain = if *up { FINGER_EXTENDED } else { FINGER_CURLED };
            points.extend(chain.iter().map(|dy| at(column, *dy)));
        }

        points
    }
}
