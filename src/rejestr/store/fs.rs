use super::DataStore;
use crate::config::RejestrConfig;
use crate::error::{RejestrError, Result};
use crate::model::UserRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    document_path: PathBuf,
}

impl FileStore {
    pub fn new(document_path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: document_path.into(),
        }
    }

    pub fn from_config(config: &RejestrConfig) -> Self {
        Self::new(config.document_path.clone())
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    fn document_dir(&self) -> &Path {
        match self.document_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RejestrError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn init(&mut self) -> Result<()> {
        let dir = self.document_dir().to_path_buf();
        debug!(dir = %dir.display(), "initializing user store");
        self.ensure_dir(&dir)
    }

    fn load_users(&self) -> Result<Vec<UserRecord>> {
        if !self.document_path.exists() {
            debug!(path = %self.document_path.display(), "no user document yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.document_path).map_err(RejestrError::Io)?;
        let users: Vec<UserRecord> = serde_json::from_str(&content).map_err(|e| {
            warn!(path = %self.document_path.display(), error = %e, "malformed user document");
            RejestrError::Serialization(e)
        })?;
        debug!(count = users.len(), "loaded user document");
        Ok(users)
    }

    fn save_users(&mut self, users: &[UserRecord]) -> Result<()> {
        let dir = self.document_dir().to_path_buf();
        self.ensure_dir(&dir)?;

        let content = serde_json::to_string_pretty(users).map_err(RejestrError::Serialization)?;

        // Atomic write: a reader never sees a half-written document
        let tmp_file = dir.join(format!(".users-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(RejestrError::Io)?;
        fs::rename(&tmp_file, &self.document_path).map_err(RejestrError::Io)?;

        debug!(count = users.len(), path = %self.document_path.display(), "saved user document");
        Ok(())
    }
}
