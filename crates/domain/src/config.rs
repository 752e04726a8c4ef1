//! Persisted tool configuration.
//!
//! Mirrors the `.reqrc` file: where request files live, which environment is
//! selected at startup, aliases for request files, and the environments.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentStore;

/// Base URL path-only targets are joined onto when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReqConfig {
    /// Directory holding request files.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Environment selected when a session starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_env: Option<String>,

    /// Base URL for targets that are only a path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Alias name to request file path.
    #[serde(default)]
    pub aliases: BTreeMap<String, PathBuf>,

    /// Named environments.
    #[serde(default)]
    pub environments: EnvironmentStore,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ReqConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            default_env: None,
            base_url: None,
            aliases: BTreeMap::new(),
            environments: EnvironmentStore::new(),
        }
    }
}

impl ReqConfig {
    /// Returns the base URL for path-only targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Looks up the file an alias points at.
    #[must_use]
    pub fn alias(&self, name: &str) -> Option<&Path> {
        self.aliases.get(name).map(PathBuf::as_path)
    }
}
