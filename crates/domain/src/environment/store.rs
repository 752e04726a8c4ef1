//! In-memory store of named environments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Variables of one environment, keyed by name.
pub type VariableMap = BTreeMap<String, String>;

/// Errors raised by [`EnvironmentStore`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// An environment with this name already exists.
    #[error("environment '{0}' already exists")]
    AlreadyExists(String),

    /// No environment with this name exists.
    #[error("environment '{0}' does not exist (create it with env-new)")]
    UnknownEnvironment(String),
}

/// Mapping of environment name to its variables.
///
/// Environments are only created explicitly and are never removed implicitly.
/// Serializes as a plain table so it can live inside the config file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentStore {
    environments: BTreeMap<String, VariableMap>,
}

impl EnvironmentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment with no variables.
    ///
    /// # Errors
    ///
    /// Returns `EnvironmentError::AlreadyExists` if the name is taken.
    pub fn create(&mut self, name: &str) -> Result<(), EnvironmentError> {
        if self.environments.contains_key(name) {
            return Err(EnvironmentError::AlreadyExists(name.to_string()));
        }
        self.environments.insert(name.to_string(), VariableMap::new());
        Ok(())
    }

    /// Inserts or overwrites a variable.
    ///
    /// # Errors
    ///
    /// Returns `EnvironmentError::UnknownEnvironment` if `env` does not exist.
    pub fn set(
        &mut self,
        env: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), EnvironmentError> {
        self.variables_mut(env)?.insert(key.into(), value.into());
        Ok(())
    }

    /// Removes a variable. Removing a key that is not present succeeds.
    ///
    /// # Errors
    ///
    /// Returns `EnvironmentError::UnknownEnvironment` if `env` does not exist.
    pub fn delete(&mut self, env: &str, key: &str) -> Result<(), EnvironmentError> {
        self.variables_mut(env)?.remove(key);
        Ok(())
    }

    /// Returns the variables of an environment.
    ///
    /// # Errors
    ///
    /// Returns `EnvironmentError::UnknownEnvironment` if `env` does not exist.
    pub fn get(&self, env: &str) -> Result<&VariableMap, EnvironmentError> {
        self.environments
            .get(env)
            .ok_or_else(|| EnvironmentError::UnknownEnvironment(env.to_string()))
    }

    /// Returns true if the environment exists.
    #[must_use]
    pub fn contains(&self, env: &str) -> bool {
        self.environments.contains_key(env)
    }

    fn variables_mut(&mut self, env: &str) -> Result<&mut VariableMap, EnvironmentError> {
        self.environments
            .get_mut(env)
            .ok_or_else(|| EnvironmentError::UnknownEnvironment(env.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_with(name: &str) -> EnvironmentStore {
        let mut store = EnvironmentStore::new();
        store.create(name).unwrap();
        store
    }

    #[test]
    fn test_create_inserts_empty_environment() {
        let store = store_with("dev");
        assert!(store.contains("dev"));
        assert!(store.get("dev").unwrap().is_empty());
    }

    #[test]
    fn test_create_twice_fails() {
        let mut store = store_with("dev");
        assert_eq!(
            store.create("dev"),
            Err(EnvironmentError::AlreadyExists("dev".to_string()))
        );
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = store_with("dev");
        store.set("dev", "host", "localhost").unwrap();
        store.set("dev", "host", "example.com").unwrap();
        assert_eq!(
            store.get("dev").unwrap().get("host").map(String::as_str),
            Some("example.com")
        );
    }

    #[test]
    fn test_delete_absent_key_succeeds() {
        let mut store = store_with("dev");
        assert_eq!(store.delete("dev", "missing"), Ok(()));
    }

    #[test]
    fn test_delete_removes_key() {
        let mut store = store_with("dev");
        store.set("dev", "token", "abc").unwrap();
        store.delete("dev", "token").unwrap();
        assert!(store.get("dev").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_environment() {
        let mut store = EnvironmentStore::new();
        let unknown = EnvironmentError::UnknownEnvironment("prod".to_string());
        assert_eq!(store.set("prod", "k", "v"), Err(unknown.clone()));
        assert_eq!(store.delete("prod", "k"), Err(unknown.clone()));
        assert_eq!(store.get("prod"), Err(unknown));
    }
}
