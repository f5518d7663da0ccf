use crate::folder_opener::interface::FolderOpener;
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;

/// Hands the folder to the desktop's file manager.
pub struct FolderOpenerSystem {
    logger: Arc<dyn Logger + Send + Sync>,
    command: String,
}

impl FolderOpenerSystem {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::with_command(logger, file_manager_command())
    }

    pub fn with_command(logger: Arc<dyn Logger + Send + Sync>, command: &str) -> Self {
        Self {
            logger: logger.with_namespace("folder_opener").with_namespace("system"),
            command: command.to_string(),
        }
    }
}

fn file_manager_command() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

impl FolderOpener for FolderOpenerSystem {
    fn open(&self, dir: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("Opening {} with {}", dir.display(), self.command))?;

        // launchers hand off to the file manager and exit, so waiting reaps them
        let status = Command::new(&self.command).arg(dir).status()?;

        // explorer exits 1 even when the window opens
        if !status.success() && !cfg!(target_os = "windows") {
            return Err(format!("{} exited with {}", self.command, status).into());
        }
        Ok(())
    }
}
