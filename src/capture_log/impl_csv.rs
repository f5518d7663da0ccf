use crate::capture::record::{CaptureRecord, LOG_HEADER};
use crate::capture_log::interface::CaptureLog;
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

pub struct CaptureLogCsv {
    logger: Arc<dyn Logger + Send + Sync>,
    path: PathBuf,
}

impl CaptureLogCsv {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, path: PathBuf) -> Self {
        Self {
            logger: logger.with_namespace("capture_log").with_namespace("csv"),
            path,
        }
    }
}

impl CaptureLog for CaptureLogCsv {
    fn append(&self, record: &CaptureRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let is_new = !self.path.is_file();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_new {
            writer.write_record(LOG_HEADER)?;
            self.logger
                .info(&format!("Created capture log {}", self.path.display()))?;
        }
        writer.write_record(record.to_row())?;
        writer.flush()?;

        self.logger.info(&format!(
            "Logged capture {} for student '{}'",
            record.image_filename, record.student_id
        ))?;
        Ok(())
    }
}
