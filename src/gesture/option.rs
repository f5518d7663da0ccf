use crate::gesture::classifier::GestureLabel;
use std::fmt;

/// Shown and recorded while no correct option has been chosen.
pub const SELECTION_PLACEHOLDER: &str = "Select Correct Option";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
    Unknown,
}

impl AnswerOption {
    /// The options an instructor can mark as correct.
    pub const CHOICES: [AnswerOption; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_choice(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn selection_text(selection: Option<AnswerOption>) -> &'static str {
        selection.map_or(SELECTION_PLACEHOLDER, |option| option.as_str())
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which answer each gesture selects. Immutable once built; owned by the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionMap {
    pub one_finger_up: AnswerOption,
    pub thumb_up: AnswerOption,
    pub three_fingers_up: AnswerOption,
    pub all_fingers_open: AnswerOption,
}

impl Default for OptionMap {
    fn default() -> Self {
        Self {
            one_finger_up: AnswerOption::A,
            thumb_up: AnswerOption::B,
            three_fingers_up: AnswerOption::C,
            all_fingers_open: AnswerOption::D,
        }
    }
}

impl OptionMap {
    pub fn map_to_option(&self, label: GestureLabel) -> AnswerOption {
        match label {
            GestureLabel::OneFingerUp => self.one_finger_up,
            GestureLabel::ThumbUp => self.thumb_up,
            GestureLabel::ThreeFingersUp => self.three_fingers_up,
            GestureLabel::AllFingersOpen => self.all_fingers_open,
            GestureLabel::Unknown => AnswerOption::Unknown,
        }
    }
}
