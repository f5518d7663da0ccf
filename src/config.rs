use crate::gesture::option::OptionMap;
use chrono::{Local, Offset};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub frame_interval: Duration,
    pub notice_ticks: u32,
    pub capture_dir: PathBuf,
    pub capture_log_file_name: String,
    pub logger_timezone: chrono::FixedOffset,
    pub option_map: OptionMap,
    pub max_hands: usize,
    pub open_folder_after_capture: bool,
    pub fake_detector_max_hands: usize,
    pub fake_detector_scene_ticks: u64,
    pub fake_frame_width: u32,
    pub fake_frame_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_secs_f64(1.0 / 30.0),
            notice_ticks: 60,
            capture_dir: PathBuf::from("captured_gestures"),
            capture_log_file_name: "gesture_log.csv".to_string(),
            logger_timezone: local_offset(),
            option_map: OptionMap::default(),
            max_hands: 50,
            open_folder_after_capture: true,
            fake_detector_max_hands: 3,
            fake_detector_scene_ticks: 45,
            fake_frame_width: 640,
            fake_frame_height: 480,
        }
    }
}

impl Config {
    pub fn capture_log_path(&self) -> PathBuf {
        self.capture_dir.join(&self.capture_log_file_name)
    }
}

fn local_offset() -> chrono::FixedOffset {
    Local::now().offset().fix()
}
