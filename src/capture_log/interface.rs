use crate::capture::record::CaptureRecord;
use std::error::Error;

/// Append-only store of capture records. Callers serialize appends.
pub trait CaptureLog {
    fn append(&self, record: &CaptureRecord) -> Result<(), Box<dyn Error + Send + Sync>>;
}
