use crate::capture::record::build_record;
use crate::capture_log::impl_csv::CaptureLogCsv;
use crate::capture_log::interface::CaptureLog;
use crate::gesture::classifier::GestureLabel;
use crate::gesture::option::AnswerOption;
use crate::library::logger::impl_console::LoggerConsole;
use chrono::FixedOffset;
use std::path::PathBuf;
use std::sync::Arc;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "gesture_quiz_{}_{}_{}",
        name,
        std::process::id(),
        rand::random::<u32>()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn logger() -> Arc<LoggerConsole> {
    Arc::new(LoggerConsole::new(FixedOffset::east_opt(0).unwrap()))
}

#[test]
fn test_header_written_once() {
    let dir = scratch_dir("header");
    let path = dir.join("gesture_log.csv");
    let log = CaptureLogCsv::new(logger(), path.clone());

    let first = build_record(
        "20240101_120000",
        "gesture_20240101_120000.jpg",
        &[GestureLabel::ThumbUp, GestureLabel::ThumbUp],
        Some(AnswerOption::B),
        "Detected Gestures: thumb_up, thumb_up | Accuracy: 100.00%",
        "S123",
    );
    let second = build_record(
        "20240101_120005",
        "gesture_20240101_120005.jpg",
        &[],
        None,
        "No hands detected.",
        "",
    );

    log.append(&first).unwrap();
    log.append(&second).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Timestamp,Image Filename,Detected Gestures,Correct Option,Result Info,Student ID"
    );
    assert_eq!(
        lines[1],
        r#"20240101_120000,gesture_20240101_120000.jpg,"thumb_up, thumb_up",B,"Detected Gestures: thumb_up, thumb_up | Accuracy: 100.00%",S123"#
    );
    assert!(lines[2].starts_with("20240101_120005,gesture_20240101_120005.jpg,"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_rows_read_back() {
    let dir = scratch_dir("read_back");
    let path = dir.join("log.csv");
    let log = CaptureLogCsv::new(logger(), path.clone());
    let record = build_record(
        "20240101_120000",
        "gesture_20240101_120000.jpg",
        &[GestureLabel::OneFingerUp, GestureLabel::Unknown],
        Some(AnswerOption::A),
        "Detected Gestures: one_finger_up, unknown | Accuracy: 50.00%",
        "S 7",
    );

    log.append(&record).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(header[2], "Detected Gestures");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].iter().collect::<Vec<_>>(), record.to_row().to_vec());

    let _ = std::fs::remove_dir_all(&dir);
}
