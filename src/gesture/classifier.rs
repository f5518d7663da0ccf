use crate::gesture::landmarks::HandLandmarks;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    ThumbUp,
    OneFingerUp,
    ThreeFingersUp,
    AllFingersOpen,
    Unknown,
}

impl GestureLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThumbUp => "thumb_up",
            Self::OneFingerUp => "one_finger_up",
            Self::ThreeFingersUp => "three_fingers_up",
            Self::AllFingersOpen => "all_fingers_open",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GestureLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thumb_up" => Ok(Self::ThumbUp),
            "one_finger_up" => Ok(Self::OneFingerUp),
            "three_fingers_up" => Ok(Self::ThreeFingersUp),
            "all_fingers_open" => Ok(Self::AllFingersOpen),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unrecognized gesture label: {}", other)),
        }
    }
}

type Rule = (fn(&HandLandmarks) -> bool, GestureLabel);

/// Evaluated top to bottom, first match wins. The predicates overlap, so the
/// order is observable behavior.
const RULES: [Rule; 4] = [
    (is_thumb_up, GestureLabel::ThumbUp),
    (is_one_finger_up, GestureLabel::OneFingerUp),
    (is_three_fingers_up, GestureLabel::ThreeFingersUp),
    (is_all_fingers_open, GestureLabel::AllFingersOpen),
];

pub fn classify(hand: &HandLandmarks) -> GestureLabel {
    RULES
        .iter()
        .find(|(matches, _)| matches(hand))
        .map(|(_, label)| *label)
        .unwrap_or(GestureLabel::Unknown)
}

fn is_thumb_up(h: &HandLandmarks) -> bool {
    h.thumb_tip.is_above(&h.thumb_ip) && h.index_tip.is_below(&h.index_pip)
}

fn is_one_finger_up(h: &HandLandmarks) -> bool {
    h.index_tip.is_above(&h.index_pip)
        && h.middle_tip.is_below(&h.middle_pip)
        && h.ring_tip.is_below(&h.ring_pip)
        && h.pinky_tip.is_below(&h.pinky_pip)
}

fn is_three_fingers_up(h: &HandLandmarks) -> bool {
    h.index_tip.is_above(&h.index_pip)
        && h.middle_tip.is_above(&h.middle_pip)
        && h.ring_tip.is_above(&h.ring_pip)
        && h.pinky_tip.is_below(&h.pinky_pip)
}

fn is_all_fingers_open(h: &HandLandmarks) -> bool {
    h.index_tip.is_above(&h.index_pip)
        && h.middle_tip.is_above(&h.middle_pip)
        && h.ring_tip.is_above(&h.ring_pip)
        && h.pinky_tip.is_above(&h.pinky_pip)
}
