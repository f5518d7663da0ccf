use crate::capture::record::{build_record, image_filename, CaptureRecord};
use crate::config::Config;
use crate::gesture::classifier::GestureLabel;
use crate::gesture::landmarks::HandLandmarks;
use crate::gesture::option::AnswerOption;
use crate::gesture::scorer::{score, status_text, Score};
use image::RgbImage;
use std::error::Error;
use std::fmt;

pub const WAITING_STATUS: &str = "Waiting for hand gesture...";
pub const CAMERA_UNAVAILABLE_STATUS: &str = "❌ Error: Unable to access camera";
pub const FRAME_UNAVAILABLE_STATUS: &str = "❌ Error: Unable to capture video frame.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraState {
    Starting,
    Ready,
    Unavailable,
}

/// One frame's classification. Replaced wholesale by the next frame.
#[derive(Clone, PartialEq)]
pub struct ProcessedFrame {
    pub image: RgbImage,
    pub hands: Vec<HandLandmarks>,
    pub labels: Vec<GestureLabel>,
}

impl fmt::Debug for ProcessedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessedFrame")
            .field("image", &self.image.dimensions())
            .field("labels", &self.labels)
            .finish()
    }
}

/// A transient message shown over the frame status for a number of ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub ticks_left: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub camera: CameraState,
    pub correct_option: Option<AnswerOption>,
    pub student_id: String,
    pub frame: Option<ProcessedFrame>,
    pub score: Score,
    pub status: String,
    pub notice: Option<Notice>,
}

#[derive(Debug)]
pub enum Msg {
    CameraStartDone(Result<(), Box<dyn Error + Send + Sync>>),
    Tick,
    FrameProcessDone(Result<ProcessedFrame, Box<dyn Error + Send + Sync>>),
    CorrectOptionSelected(AnswerOption),
    StudentIdChanged(String),
    CaptureRequested { timestamp: String },
    CaptureDone(Result<String, Box<dyn Error + Send + Sync>>),
    OpenFolderDone(Result<(), Box<dyn Error + Send + Sync>>),
}

impl Msg {
    /// Messages that arrive every frame and are not worth a log line.
    pub fn is_frame_traffic(&self) -> bool {
        matches!(self, Msg::Tick | Msg::FrameProcessDone(Ok(_)))
    }
}

#[derive(Clone, PartialEq)]
pub enum Effect {
    StartCamera,
    ProcessFrame,
    SaveCapture {
        image: RgbImage,
        record: CaptureRecord,
    },
    OpenFolder,
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::StartCamera => write!(f, "StartCamera"),
            Effect::ProcessFrame => write!(f, "ProcessFrame"),
            Effect::SaveCapture { image, record } => f
                .debug_struct("SaveCapture")
                .field("image", &image.dimensions())
                .field("record", record)
                .finish(),
            Effect::OpenFolder => write!(f, "OpenFolder"),
        }
    }
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model {
            camera: CameraState::Starting,
            correct_option: None,
            student_id: String::new(),
            frame: None,
            score: Score::default(),
            status: WAITING_STATUS.to_string(),
            notice: None,
        },
        vec![Effect::StartCamera],
    )
}

pub fn transition(config: &Config, mut model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::CameraStartDone(Ok(())) => {
            model.camera = CameraState::Ready;
            (model, vec![])
        }
        Msg::CameraStartDone(Err(_)) => {
            model.camera = CameraState::Unavailable;
            model.status = CAMERA_UNAVAILABLE_STATUS.to_string();
            (model, vec![])
        }

        Msg::Tick => {
            model.notice = model.notice.and_then(|notice| match notice.ticks_left {
                0 | 1 => None,
                n => Some(Notice {
                    ticks_left: n - 1,
                    ..notice
                }),
            });

            match model.camera {
                CameraState::Ready => (model, vec![Effect::ProcessFrame]),
                _ => (model, vec![]),
            }
        }
        Msg::FrameProcessDone(Ok(frame)) => {
            model.score = score(&frame.labels, model.correct_option, &config.option_map);
            model.status = status_text(&frame.labels, &model.score);
            model.frame = Some(frame);
            (model, vec![])
        }
        Msg::FrameProcessDone(Err(_)) => {
            model.status = FRAME_UNAVAILABLE_STATUS.to_string();
            (model, vec![])
        }

        Msg::CorrectOptionSelected(option) => {
            model.correct_option = Some(option);
            (model, vec![])
        }
        Msg::StudentIdChanged(student_id) => {
            model.student_id = student_id;
            (model, vec![])
        }

        Msg::CaptureRequested { timestamp } => {
            let effects: Vec<Effect> = model
                .frame
                .as_ref()
                .map(|frame| Effect::SaveCapture {
                    image: frame.image.clone(),
                    record: build_record(
                        &timestamp,
                        &image_filename(&timestamp),
                        &frame.labels,
                        model.correct_option,
                        &model.status,
                        model.student_id.trim(),
                    ),
                })
                .into_iter()
                .collect();
            (model, effects)
        }
        Msg::CaptureDone(Ok(filename)) => {
            model.notice = Some(Notice {
                text: format!("📸 Saved: {} + logged", filename),
                ticks_left: config.notice_ticks,
            });

            let effects = if config.open_folder_after_capture {
                vec![Effect::OpenFolder]
            } else {
                vec![]
            };
            (model, effects)
        }
        Msg::CaptureDone(Err(e)) => {
            model.notice = Some(Notice {
                text: format!("❌ Error: Unable to save capture ({})", e),
                ticks_left: config.notice_ticks,
            });
            (model, vec![])
        }

        Msg::OpenFolderDone(_) => (model, vec![]),
    }
}
