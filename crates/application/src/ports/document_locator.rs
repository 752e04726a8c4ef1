//! Document locator port.

use std::path::PathBuf;

use req_domain::ReqConfig;
use thiserror::Error;

/// Errors raised while turning an alias or glob into file paths.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The glob pattern is malformed.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// Parser message.
        message: String,
    },

    /// Nothing matched.
    #[error("no request files match '{0}'")]
    NoMatches(String),

    /// A directory entry could not be read.
    #[error("could not read {path}: {message}")]
    Unreadable {
        /// Offending path.
        path: PathBuf,
        /// Underlying message.
        message: String,
    },
}

/// A request file found under the config root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedDocument {
    /// Path of the file.
    pub path: PathBuf,
    /// Alias pointing at the file, if one exists.
    pub alias: Option<String>,
}

/// Resolves aliases and glob patterns to request files.
pub trait DocumentLocator: Send + Sync {
    /// Returns the alias target when `target` is an alias, otherwise every
    /// file matching `target` as a glob, sorted.
    ///
    /// # Errors
    ///
    /// Returns `LocateError::NoMatches` when nothing matches.
    fn resolve(&self, config: &ReqConfig, target: &str) -> Result<Vec<PathBuf>, LocateError>;

    /// Lists request files in the config root.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be scanned.
    fn list(&self, config: &ReqConfig) -> Result<Vec<ListedDocument>, LocateError>;
}
