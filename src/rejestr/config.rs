use crate::error::{RejestrError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DOCUMENT_PATH: &str = "data/users.json";

/// Configuration for a user register, stored in `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejestrConfig {
    /// Path of the JSON document holding every user record
    #[serde(default = "default_document_path")]
    pub document_path: PathBuf,
}

fn default_document_path() -> PathBuf {
    PathBuf::from(DEFAULT_DOCUMENT_PATH)
}

impl Default for RejestrConfig {
    fn default() -> Self {
        Self {
            document_path: default_document_path(),
        }
    }
}

impl RejestrConfig {
    pub fn with_document_path(path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: path.into(),
        }
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RejestrConfig = serde_json::from_str(&content).map_err(|e| {
            RejestrError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Resolve a relative document path against `base`; absolute paths pass through.
    pub fn resolve_document_path<P: AsRef<Path>>(&self, base: P) -> PathBuf {
        if self.document_path.is_absolute() {
            self.document_path.clone()
        } else {
            base.as_ref().join(&self.document_path)
        }
    }
}
