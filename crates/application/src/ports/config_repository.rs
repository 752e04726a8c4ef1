//! Config repository port
//!
//! Defines the interface for persisting the tool configuration.

use std::path::Path;

use async_trait::async_trait;
use req_domain::ReqConfig;

use super::FileSystemError;

/// Errors that can occur while loading or saving the config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] FileSystemError),

    /// The config file is not valid.
    #[error("invalid config {path}: {message}")]
    Parse {
        /// Config file path.
        path: String,
        /// Parser message.
        message: String,
    },

    /// The config could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository trait for config persistence.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Loads the config at `path`. A missing file yields the default config.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    async fn load(&self, path: &Path) -> Result<ReqConfig, ConfigError>;

    /// Writes the config to `path`.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    async fn save(&self, path: &Path, config: &ReqConfig) -> Result<(), ConfigError>;
}
