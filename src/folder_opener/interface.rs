use std::error::Error;
use std::path::Path;

pub trait FolderOpener {
    fn open(&self, dir: &Path) -> Result<(), Box<dyn Error + Send + Sync>>;
}
