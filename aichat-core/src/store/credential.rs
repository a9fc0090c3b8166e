//! Bearer token file

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::StorageConfig;
use crate::{Error, Result};

const CURRENT_DIR: &str = "the current directory";

/// Read-only access to the operator-supplied bearer token
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store reading from `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a store for the configured auth file
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(storage.auth_path())
    }

    /// Read the token, trimmed of surrounding whitespace
    ///
    /// A missing, unreadable or blank file yields [`Error::MissingCredential`].
    pub fn get_credential(&self) -> Result<String> {
        let token = match std::fs::read_to_string(&self.path) {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                debug!("Cannot read credential file {:?}: {}", self.path, e);
                String::new()
            }
        };

        if token.is_empty() {
            return Err(Error::MissingCredential {
                file: self.file_name(),
                location: self.location(),
            });
        }
        Ok(token)
    }

    /// Get the credential file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    /// Describe the directory holding the file, as shown to the user
    fn location(&self) -> String {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && dir != Path::new(".") => dir,
            _ => return CURRENT_DIR.to_string(),
        };
        let is_cwd = std::env::current_dir()
            .map(|cwd| cwd == dir)
            .unwrap_or(false);
        if is_cwd {
            CURRENT_DIR.to_string()
        } else {
            dir.display().to_string()
        }
    }
}
