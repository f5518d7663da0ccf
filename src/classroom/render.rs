use crate::classroom::core::{CameraState, Model};

/// The line shown under the preview: a pending notice, else the frame status.
pub fn status_line(model: &Model) -> &str {
    match &model.notice {
        Some(notice) => notice.text.as_str(),
        None => model.status.as_str(),
    }
}

pub fn window_title(model: &Model) -> String {
    match model.camera {
        CameraState::Starting => "Gesture Quiz (starting camera)".to_string(),
        CameraState::Ready => format!("Gesture Quiz ({} responses)", model.score.total_count),
        CameraState::Unavailable => "Gesture Quiz (no camera)".to_string(),
    }
}
