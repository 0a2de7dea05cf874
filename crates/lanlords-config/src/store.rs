//! On-disk persistence for the configuration document.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::ConfigDocument;
use crate::error::{ConfigError, ConfigResult};

/// Directory under the home directory holding CLI state.
const CONFIG_DIR_NAME: &str = ".lanlords";
/// File name of the configuration file within the config directory.
const CONFIG_FILE_NAME: &str = "config";

/// Reads and writes the configuration file at a fixed path.
///
/// The store owns the document lifecycle: every read re-parses from disk and
/// every write replaces the file wholesale. No locking is provided;
/// concurrent invocations racing on [`ConfigStore::save`] can lose updates.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location of the configuration file, `~/.lanlords/config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeDirUnavailable`] when no home directory
    /// can be determined for the current user.
    pub fn default_path() -> ConfigResult<PathBuf> {
        let home = env::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigMissing`] when the file does not exist,
    /// [`ConfigError::Io`] when it cannot be read, and
    /// [`ConfigError::ParseFailed`] when its contents are malformed.
    pub fn load(&self) -> ConfigResult<ConfigDocument> {
        if !self.path.is_file() {
            return Err(ConfigError::ConfigMissing {
                path: self.path.clone(),
            });
        }
        let text = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "configuration file read");
        ConfigDocument::parse(&text)
    }

    /// Write `document` to disk, creating the containing directory if needed
    /// and replacing any existing file in full.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the directory cannot be created or
    /// the file cannot be written.
    pub fn save(&self, document: &ConfigDocument) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, document.to_ini_string()).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "configuration file written");
        Ok(())
    }
}
