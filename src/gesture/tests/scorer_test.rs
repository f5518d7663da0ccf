use super::fixture::hand_for;
use crate::gesture::classifier::{classify, GestureLabel};
use crate::gesture::option::{AnswerOption, OptionMap};
use crate::gesture::scorer::{join_labels, score, status_text, Score, NO_HANDS_STATUS};

#[test]
fn test_default_option_map() {
    let map = OptionMap::default();

    assert_eq!(map.map_to_option(GestureLabel::OneFingerUp), AnswerOption::A);
    assert_eq!(map.map_to_option(GestureLabel::ThumbUp), AnswerOption::B);
    assert_eq!(map.map_to_option(GestureLabel::ThreeFingersUp), AnswerOption::C);
    assert_eq!(map.map_to_option(GestureLabel::AllFingersOpen), AnswerOption::D);
    assert_eq!(map.map_to_option(GestureLabel::Unknown), AnswerOption::Unknown);
}

#[test]
fn test_empty_frame_scores_zero() {
    for correct in [None, Some(AnswerOption::A), Some(AnswerOption::D)] {
        let result = score(&[], correct, &OptionMap::default());

        assert_eq!(result.total_count, 0);
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.accuracy_percent, 0.0);
    }
}

#[test]
fn test_all_correct_scores_hundred() {
    let labels = [GestureLabel::ThreeFingersUp; 7];

    let result = score(&labels, Some(AnswerOption::C), &OptionMap::default());

    assert_eq!(result.correct_count, 7);
    assert_eq!(result.accuracy_percent, 100.0);
}

#[test]
fn test_thumb_up_scenario() {
    let label = classify(&hand_for(GestureLabel::ThumbUp));
    let map = OptionMap::default();

    assert_eq!(label, GestureLabel::ThumbUp);
    assert_eq!(map.map_to_option(label), AnswerOption::B);
    assert_eq!(
        score(&[label], Some(AnswerOption::B), &map),
        Score {
            correct_count: 1,
            total_count: 1,
            accuracy_percent: 100.0,
        }
    );
}

#[test]
fn test_two_hands_half_correct() {
    let labels = [GestureLabel::OneFingerUp, GestureLabel::Unknown];

    let result = score(&labels, Some(AnswerOption::A), &OptionMap::default());

    assert_eq!(result.correct_count, 1);
    assert_eq!(result.total_count, 2);
    assert_eq!(result.accuracy_percent, 50.0);
    assert_eq!(
        status_text(&labels, &result),
        "Detected Gestures: one_finger_up, unknown | Accuracy: 50.00%"
    );
}

#[test]
fn test_no_selection_matches_nothing() {
    let labels = [GestureLabel::ThumbUp, GestureLabel::Unknown];

    let result = score(&labels, None, &OptionMap::default());

    assert_eq!(result.correct_count, 0);
    assert_eq!(result.total_count, 2);
    assert_eq!(result.accuracy_percent, 0.0);
}

#[test]
fn test_unknown_is_never_correct() {
    let labels = [GestureLabel::Unknown, GestureLabel::Unknown];

    let result = score(&labels, Some(AnswerOption::Unknown), &OptionMap::default());

    assert_eq!(result.correct_count, 0);
}

#[test]
fn test_custom_option_map() {
    let map = OptionMap {
        thumb_up: AnswerOption::D,
        all_fingers_open: AnswerOption::B,
        ..OptionMap::default()
    };

    let result = score(&[GestureLabel::ThumbUp], Some(AnswerOption::D), &map);

    assert_eq!(result.correct_count, 1);
}

#[test]
fn test_status_text() {
    assert_eq!(status_text(&[], &Score::default()), NO_HANDS_STATUS);
    assert_eq!(NO_HANDS_STATUS, "No hands detected.");

    let labels = [GestureLabel::ThumbUp, GestureLabel::Unknown, GestureLabel::ThumbUp];
    let result = score(&labels, Some(AnswerOption::B), &OptionMap::default());
    assert_eq!(
        status_text(&labels, &result),
        "Detected Gestures: thumb_up, unknown, thumb_up | Accuracy: 66.67%"
    );
}

#[test]
fn test_join_labels() {
    assert_eq!(join_labels(&[]), "");
    assert_eq!(
        join_labels(&[GestureLabel::AllFingersOpen, GestureLabel::OneFingerUp]),
        "all_fingers_open, one_finger_up"
    );
}
