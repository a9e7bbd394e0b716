//! File-based implementation of SessionStore

use std::fs;
use std::path::{Path, PathBuf};

use truckfleet_domain::model::{ConversationLog, Fleet};
use truckfleet_domain::repository::{SessionStore, TranscriptEnding};
use truckfleet_types::Result;

use crate::csv_export::save_fleet_csv;
use crate::transcript::save_transcript;

/// Writes the fleet CSV and the transcript to fixed paths
pub struct FileSessionStore {
    fleet_path: PathBuf,
    transcript_path: PathBuf,
    create_dirs: bool,
}

impl FileSessionStore {
    pub fn new(fleet_path: PathBuf, transcript_path: PathBuf) -> Self {
        Self {
            fleet_path,
            transcript_path,
            create_dirs: true,
        }
    }

    /// Fail instead of creating missing parent directories
    pub fn without_dir_creation(mut self) -> Self {
        self.create_dirs = false;
        self
    }

    pub fn fleet_path(&self) -> &Path {
        &self.fleet_path
    }

    pub fn transcript_path(&self) -> &Path {
        &self.transcript_path
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if !self.create_dirs {
            return Ok(());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn save_fleet(&self, fleet: &Fleet) -> Result<()> {
        self.ensure_parent(&self.fleet_path)?;
        save_fleet_csv(&self.fleet_path, fleet)
    }

    fn save_transcript(&self, log: &ConversationLog, ending: TranscriptEnding) -> Result<()> {
        self.ensure_parent(&self.transcript_path)?;
        save_transcript(&self.transcript_path, log, ending)
    }
}
