use crate::capture::record::CaptureRecord;
use crate::capture_log::interface::CaptureLog;
use std::error::Error;
use std::sync::Mutex;

#[allow(dead_code)]
#[derive(Default)]
pub struct CaptureLogFake {
    records: Mutex<Vec<CaptureRecord>>,
}

#[allow(dead_code)]
impl CaptureLogFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<CaptureRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl CaptureLog for CaptureLogFake {
    fn append(&self, record: &CaptureRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.records
            .lock()
            .map_err(|e| e.to_string())?
            .push(record.clone());
        Ok(())
    }
}
