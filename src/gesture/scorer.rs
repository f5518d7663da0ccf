use crate::gesture::classifier::GestureLabel;
use crate::gesture::option::{AnswerOption, OptionMap};

pub const NO_HANDS_STATUS: &str = "No hands detected.";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Score {
    pub correct_count: usize,
    pub total_count: usize,
    pub accuracy_percent: f64,
}

/// Scores one frame's responses against the instructor's selection.
///
/// `None` is the unselected placeholder and matches nothing, as does
/// [`AnswerOption::Unknown`]. An empty frame scores `0.0`.
pub fn score(
    labels: &[GestureLabel],
    correct_option: Option<AnswerOption>,
    option_map: &OptionMap,
) -> Score {
    let total_count = labels.len();

    let correct_count = match correct_option.filter(AnswerOption::is_choice) {
        Some(correct) => labels
            .iter()
            .filter(|label| option_map.map_to_option(**label) == correct)
            .count(),
        None => 0,
    };

    let accuracy_percent = if total_count > 0 {
        100.0 * correct_count as f64 / total_count as f64
    } else {
        0.0
    };

    Score {
        correct_count,
        total_count,
        accuracy_percent,
    }
}

pub fn join_labels(labels: &[GestureLabel]) -> String {
    labels
        .iter()
        .map(GestureLabel::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn status_text(labels: &[GestureLabel], score: &Score) -> String {
    if labels.is_empty() {
        return NO_HANDS_STATUS.to_string();
    }

    format!(
        "Detected Gestures: {} | Accuracy: {:.2}%",
        join_labels(labels),
        score.accuracy_percent
    )
}
