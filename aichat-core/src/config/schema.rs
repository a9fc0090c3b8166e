//! Configuration schema definitions

use std::path::{Path, PathBuf};

/// Base URL of the hosted app conversation API
pub const DEFAULT_BASE_URL: &str = "https://qianfan.baidubce.com";

/// Identifier of the registered application on the service
pub const DEFAULT_APP_ID: &str = "4b23ba70-14f8-4798-92c6-3fbaf26eefce";

/// File holding the bearer token
pub const DEFAULT_AUTH_FILE: &str = "auth.txt";

/// File holding the current conversation id
pub const DEFAULT_CONVERSATION_FILE: &str = "conversation_id.txt";

/// Root configuration for aichat
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Remote service configuration
    pub service: ServiceConfig,
    /// Local file storage configuration
    pub storage: StorageConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Create a configuration whose storage files live in `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            storage: StorageConfig {
                dir: dir.as_ref().to_path_buf(),
                ..StorageConfig::default()
            },
            ..Self::default()
        }
    }

    /// Create a configuration rooted at the process working directory
    pub fn from_current_dir() -> crate::Result<Self> {
        let dir = std::env::current_dir().map_err(|e| {
            crate::Error::Config(format!("failed to resolve working directory: {}", e))
        })?;
        Ok(Self::in_dir(dir))
    }
}

/// Remote service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Scheme and host of the API, without a trailing path
    pub base_url: String,
    /// Application id sent with every request
    pub app_id: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: DEFAULT_APP_ID.to_string(),
        }
    }
}

/// Local file storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory the files below are resolved against
    pub dir: PathBuf,
    /// Bearer token file name
    pub auth_file: String,
    /// Conversation id file name
    pub conversation_file: String,
}

impl StorageConfig {
    /// Full path of the bearer token file
    pub fn auth_path(&self) -> PathBuf {
        self.dir.join(&self.auth_file)
    }

    /// Full path of the conversation id file
    pub fn conversation_path(&self) -> PathBuf {
        self.dir.join(&self.conversation_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            auth_file: DEFAULT_AUTH_FILE.to_string(),
            conversation_file: DEFAULT_CONVERSATION_FILE.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (text, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "error".to_string(),
            format: "text".to_string(),
        }
    }
}
