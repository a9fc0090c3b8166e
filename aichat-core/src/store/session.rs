//! Conversation id file

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::StorageConfig;
use crate::{Error, Result};

/// Persists the id of the current conversation
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a store for the configured conversation file
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(storage.conversation_path())
    }

    /// Overwrite the stored conversation id
    ///
    /// The id is written to a sibling temporary file first and renamed over
    /// the target, so readers never observe a partial write.
    pub fn save_session(&self, id: &str) -> Result<()> {
        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, id.as_bytes())?;
        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(Error::Session(format!(
                "failed to replace {:?}: {}",
                self.path, e
            )));
        }
        debug!("Saved conversation id to {:?}", self.path);
        Ok(())
    }

    /// Load the stored conversation id
    ///
    /// Returns an empty string when the file is missing or unreadable.
    pub fn load_session(&self) -> String {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                debug!("No stored conversation id at {:?}: {}", self.path, e);
                String::new()
            }
        }
    }

    /// Get the session file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
