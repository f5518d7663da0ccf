use crate::gesture::classifier::GestureLabel;
use crate::gesture::option::AnswerOption;
use crate::gesture::scorer::join_labels;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const LOG_HEADER: [&str; 6] = [
    "Timestamp",
    "Image Filename",
    "Detected Gestures",
    "Correct Option",
    "Result Info",
    "Student ID",
];

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// One row of the capture log. Never updated once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRecord {
    pub timestamp: String,
    pub image_filename: String,
    pub detected_gestures: String,
    pub correct_option: String,
    pub result_info: String,
    pub student_id: String,
}

impl CaptureRecord {
    pub fn to_row(&self) -> [&str; 6] {
        [
            self.timestamp.as_str(),
            self.image_filename.as_str(),
            self.detected_gestures.as_str(),
            self.correct_option.as_str(),
            self.result_info.as_str(),
            self.student_id.as_str(),
        ]
    }
}

pub fn capture_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn image_filename(timestamp: &str) -> String {
    format!("gesture_{}.jpg", timestamp)
}

/// Assembles a log row. Timestamp and filename are supplied by the caller so
/// this stays free of clocks; the student ID is recorded as given.
pub fn build_record(
    timestamp: &str,
    image_filename: &str,
    frame_labels: &[GestureLabel],
    correct_option: Option<AnswerOption>,
    outcome_summary: &str,
    student_id: &str,
) -> CaptureRecord {
    CaptureRecord {
        timestamp: timestamp.to_string(),
        image_filename: image_filename.to_string(),
        detected_gestures: join_labels(frame_labels),
        correct_option: AnswerOption::selection_text(correct_option).to_string(),
        result_info: outcome_summary.to_string(),
        student_id: student_id.to_string(),
    }
}
