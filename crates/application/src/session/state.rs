//! Interactive session state.

use req_domain::{EnvironmentError, ReqConfig, VariableMap};
use thiserror::Error;

/// Errors that can occur when changing session state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A variable command was used with no environment selected.
    #[error("no environment selected (select one with env-select or create one with env-new)")]
    NoEnvironmentSelected,

    /// The environment store rejected the change.
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}

/// The loaded configuration plus the currently selected environment.
///
/// Each REPL command receives the session explicitly; nothing is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    config: ReqConfig,
    current: Option<String>,
}

impl Session {
    /// Starts a session on `config`, selecting its default environment.
    #[must_use]
    pub fn new(config: ReqConfig) -> Self {
        let current = config.default_env.clone().filter(|name| !name.is_empty());
        Self { config, current }
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &ReqConfig {
        &self.config
    }

    /// Returns the name of the selected environment.
    #[must_use]
    pub fn current_env(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns the variables of the selected environment.
    ///
    /// With no environment selected this is an empty map, so documents can
    /// still be run.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEnvironment` if the selected name is not in the store.
    pub fn environment(&self) -> Result<VariableMap, SessionError> {
        match &self.current {
            Some(name) => Ok(self.config.environments.get(name)?.clone()),
            None => Ok(VariableMap::new()),
        }
    }

    /// Switches to an existing environment.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEnvironment` if `name` is not in the store.
    pub fn select_env(&mut self, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        if !self.config.environments.contains(name) {
            return Err(EnvironmentError::UnknownEnvironment(name.to_string()).into());
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Creates an environment and switches to it.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if `name` is taken.
    pub fn new_env(&mut self, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        self.config.environments.create(name)?;
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Sets a variable in the selected environment.
    ///
    /// # Errors
    ///
    /// Returns `NoEnvironmentSelected` or `UnknownEnvironment`.
    pub fn set_var(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        let env = self.current.as_deref().ok_or(SessionError::NoEnvironmentSelected)?;
        self.config.environments.set(env, key, value)?;
        Ok(())
    }

    /// Deletes a variable from the selected environment. An absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `NoEnvironmentSelected` or `UnknownEnvironment`.
    pub fn delete_var(&mut self, key: &str) -> Result<(), SessionError> {
        let env = self.current.as_deref().ok_or(SessionError::NoEnvironmentSelected)?;
        self.config.environments.delete(env, key)?;
        Ok(())
    }
}
