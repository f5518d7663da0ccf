use thiserror::Error;

pub const HAND_LANDMARK_COUNT: usize = 21;

/// A detector-space coordinate, both axes normalized to the frame (0..1).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
}

impl NormalizedLandmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel-space coordinate. Origin is the top-left corner, so "up" is a smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LandmarkPoint {
    pub x: i32,
    pub y: i32,
}

impl LandmarkPoint {
    pub fn is_above(&self, other: &LandmarkPoint) -> bool {
        self.y < other.y
    }

    pub fn is_below(&self, other: &LandmarkPoint) -> bool {
        self.y > other.y
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    #[error("invalid landmark set: expected {expected} points, got {actual}")]
    WrongCount { expected: usize, actual: usize },
    #[error("invalid landmark set: point {index} out of range ({x}, {y})")]
    OutOfRange { index: usize, x: f32, y: f32 },
}

/// One hand's 21 keypoints in pixel space, named by anatomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandLandmarks {
    pub wrist: LandmarkPoint,
    pub thumb_cmc: LandmarkPoint,
    pub thumb_mcp: LandmarkPoint,
    pub thumb_ip: LandmarkPoint,
    pub thumb_tip: LandmarkPoint,
    pub index_mcp: LandmarkPoint,
    pub index_pip: LandmarkPoint,
    pub index_dip: LandmarkPoint,
    pub index_tip: LandmarkPoint,
    pub middle_mcp: LandmarkPoint,
    pub middle_pip: LandmarkPoint,
    pub middle_dip: LandmarkPoint,
    pub middle_tip: LandmarkPoint,
    pub ring_mcp: LandmarkPoint,
    pub ring_pip: LandmarkPoint,
    pub ring_dip: LandmarkPoint,
    pub ring_tip: LandmarkPoint,
    pub pinky_mcp: LandmarkPoint,
    pub pinky_pip: LandmarkPoint,
    pub pinky_dip: LandmarkPoint,
    pub pinky_tip: LandmarkPoint,
}

impl HandLandmarks {
    /// Scales a detector keypoint set into pixel space for a `width` x `height` frame.
    ///
    /// Coordinates are scaled in `f64` and truncated toward zero. The set must hold exactly
    /// [`HAND_LANDMARK_COUNT`] finite points inside `[0, 1]`.
    pub fn from_normalized(
        points: &[NormalizedLandmark],
        width: u32,
        height: u32,
    ) -> Result<Self, LandmarkError> {
        if points.len() != HAND_LANDMARK_COUNT {
            return Err(LandmarkError::WrongCount {
                expected: HAND_LANDMARK_COUNT,
                actual: points.len(),
            });
        }

        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !in_unit_range(p.x) || !in_unit_range(p.y))
        {
            return Err(LandmarkError::OutOfRange {
                index,
                x: p.x,
                y: p.y,
            });
        }

        let px = |i: usize| LandmarkPoint {
            x: (f64::from(points[i].x) * f64::from(width)) as i32,
            y: (f64::from(points[i].y) * f64::from(height)) as i32,
        };

        Ok(Self {
            wrist: px(0),
            thumb_cmc: px(1),
            thumb_mcp: px(2),
            thumb_ip: px(3),
            thumb_tip: px(4),
            index_mcp: px(5),
            index_pip: px(6),
            index_dip: px(7),
            index_tip: px(8),
            middle_mcp: px(9),
            middle_pip: px(10),
            middle_dip: px(11),
            middle_tip: px(12),
            ring_mcp: px(13),
            ring_pip: px(14),
            ring_dip: px(15),
            ring_tip: px(16),
            pinky_mcp: px(17),
            pinky_pip: px(18),
            pinky_dip: px(19),
            pinky_tip: px(20),
        })
    }

    /// All points in detector index order, for drawing overlays.
    pub fn points(&self) -> [LandmarkPoint; HAND_LANDMARK_COUNT] {
        [
            self.wrist,
            self.thumb_cmc,
            self.thumb_mcp,
            self.thumb_ip,
            self.thumb_tip,
            self.index_mcp,
            self.index_pip,
            self.index_dip,
            self.index_tip,
            self.middle_mcp,
            self.middle_pip,
            self.middle_dip,
            self.middle_tip,
            self.ring_mcp,
            self.ring_pip,
            self.ring_dip,
            self.ring_tip,
            self.pinky_mcp,
            self.pinky_pip,
            self.pinky_dip,
            self.pinky_tip,
        ]
    }
}

fn in_unit_range(v: f32) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}
