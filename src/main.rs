use capture_log::impl_csv::CaptureLogCsv;
use classroom::main::Classroom;
use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::interface::DeviceCamera;
use folder_opener::impl_system::FolderOpenerSystem;
use hand_detector::impl_fake::HandDetectorFake;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use snapshot_store::impl_fs::SnapshotStoreFs;
use std::sync::Arc;

mod capture;
mod capture_log;
mod classroom;
mod config;
mod device_camera;
mod folder_opener;
mod gesture;
mod hand_detector;
mod library;
mod snapshot_store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(
        logger.clone(),
        config.fake_frame_width,
        config.fake_frame_height,
    ));

    let hand_detector = Arc::new(HandDetectorFake::new(
        logger.clone(),
        config.fake_detector_max_hands,
        config.fake_detector_scene_ticks,
    ));

    let snapshot_store = Arc::new(SnapshotStoreFs::new(
        logger.clone(),
        config.capture_dir.clone(),
    ));

    let capture_log = Arc::new(CaptureLogCsv::new(logger.clone(), config.capture_log_path()));

    let folder_opener = Arc::new(FolderOpenerSystem::new(logger.clone()));

    let mut classroom = Classroom::new(
        config,
        logger.clone(),
        device_camera.clone(),
        hand_detector,
        snapshot_store,
        capture_log,
        folder_opener,
    );

    classroom.start();

    classroom::gui::run(classroom)?;

    if let Err(e) = device_camera.stop() {
        let _ = logger.error(&format!("Camera did not stop cleanly: {}", e));
    }

    Ok(())
}
