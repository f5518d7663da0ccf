use crate::capture_log::interface::CaptureLog;
use crate::classroom::core::{init, transition, Effect, Model, Msg};
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::folder_opener::interface::FolderOpener;
use crate::hand_detector::interface::HandDetector;
use crate::library::logger::interface::Logger;
use crate::snapshot_store::interface::SnapshotStore;
use std::collections::VecDeque;
use std::sync::Arc;

/// Owns the session model and the collaborators that effects run against.
/// Everything runs on the caller's thread: a message and every effect it
/// triggers are fully handled before `dispatch` returns.
pub struct Classroom {
    pub model: Model,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub hand_detector: Arc<dyn HandDetector + Send + Sync>,
    pub snapshot_store: Arc<dyn SnapshotStore + Send + Sync>,
    pub capture_log: Arc<dyn CaptureLog + Send + Sync>,
    pub folder_opener: Arc<dyn FolderOpener + Send + Sync>,
}

impl Classroom {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        hand_detector: Arc<dyn HandDetector + Send + Sync>,
        snapshot_store: Arc<dyn SnapshotStore + Send + Sync>,
        capture_log: Arc<dyn CaptureLog + Send + Sync>,
        folder_opener: Arc<dyn FolderOpener + Send + Sync>,
    ) -> Self {
        Self {
            model: init().0,
            config,
            logger: logger.with_namespace("classroom"),
            device_camera,
            hand_detector,
            snapshot_store,
            capture_log,
            folder_opener,
        }
    }

    pub fn start(&mut self) {
        let (model, effects) = init();
        self.model = model;
        self.run_effects(effects);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);

        while let Some(msg) = queue.pop_front() {
            let quiet = msg.is_frame_traffic();
            if !quiet {
                let _ = self.logger.info(&format!("msg: {:?}", msg));
            }

            let (new_model, effects) = transition(&self.config, self.model.clone(), msg);
            self.model = new_model;

            if !quiet && !effects.is_empty() {
                let _ = self.logger.info(&format!("effects: {:?}", effects));
            }

            queue.extend(effects.into_iter().map(|effect| self.run_effect(effect)));
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            let msg = self.run_effect(effect);
            self.dispatch(msg);
        }
    }
}
