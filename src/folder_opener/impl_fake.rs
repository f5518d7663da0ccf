use crate::folder_opener::interface::FolderOpener;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[allow(dead_code)]
#[derive(Default)]
pub struct FolderOpenerFake {
    opened: Mutex<Vec<PathBuf>>,
}

#[allow(dead_code)]
impl FolderOpenerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

impl FolderOpener for FolderOpenerFake {
    fn open(&self, dir: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.opened
            .lock()
            .map_err(|e| e.to_string())?
            .push(dir.to_path_buf());
        Ok(())
    }
}
