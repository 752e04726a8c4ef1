//! TOML config repository implementation.
//!
//! The config lives in a single `.reqrc` file:
//! ```text
//! root = "requests"
//! default_env = "dev"
//!
//! [aliases]
//! ping = "requests/ping.yml"
//!
//! [environments.dev]
//! host = "http://localhost:8080"
//! ```

use std::path::Path;

use async_trait::async_trait;
use req_application::ports::{ConfigError, ConfigRepository, FileSystem};
use req_domain::ReqConfig;

/// Config repository backed by a TOML file.
#[derive(Debug, Clone)]
pub struct TomlConfigRepository<F> {
    fs: F,
}

impl<F: FileSystem> TomlConfigRepository<F> {
    /// Creates a new TOML config repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

/// Parses config text.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the text is not a valid config.
pub fn parse_config(path: &Path, source: &str) -> Result<ReqConfig, ConfigError> {
    toml::from_str(source).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}

#[async_trait]
impl<F: FileSystem> ConfigRepository for TomlConfigRepository<F> {
    async fn load(&self, path: &Path) -> Result<ReqConfig, ConfigError> {
        if !self.fs.exists(path).await {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ReqConfig::default());
        }

        let source = self.fs.read_file_string(path).await?;
        let config = parse_config(path, &source)?;
        tracing::debug!(
            path = %path.display(),
            aliases = config.aliases.len(),
            "loaded config"
        );
        Ok(config)
    }

    async fn save(&self, path: &Path, config: &ReqConfig) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(config).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        self.fs.write_file(path, content.as_bytes()).await?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::persistence::TokioFileSystem;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            Path::new(".reqrc"),
            r#"
root = "requests"
default_env = "dev"

[aliases]
ping = "requests/ping.yml"

[environments.dev]
host = "http://localhost:8080"
token = "abc"

[environments.prod]
"#,
        )
        .unwrap();

        assert_eq!(config.root, PathBuf::from("requests"));
        assert_eq!(config.default_env.as_deref(), Some("dev"));
        assert_eq!(config.alias("ping"), Some(Path::new("requests/ping.yml")));
        assert_eq!(config.environments.get("dev").unwrap()["token"], "abc");
        assert!(config.environments.get("prod").unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config(Path::new(".reqrc"), "").unwrap();
        assert_eq!(config, ReqConfig::default());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_config(Path::new("bad.reqrc"), "root = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == "bad.reqrc"));
    }

    #[tokio::test]
    async fn test_missing_file_gives_default_config() {
        let dir = TempDir::new().unwrap();
        let repo = TomlConfigRepository::new(TokioFileSystem::new());

        let config = repo.load(&dir.path().join(".reqrc")).await.unwrap();
        assert_eq!(config, ReqConfig::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".reqrc");
        let repo = TomlConfigRepository::new(TokioFileSystem::new());

        let mut config = ReqConfig {
            default_env: Some("dev".to_string()),
            ..ReqConfig::default()
        };
        config
            .aliases
            .insert("ping".to_string(), PathBuf::from("ping.yml"));
        config.environments.create("dev").unwrap();
        config
            .environments
            .set("dev", "greeting", "hello world")
            .unwrap();

        repo.save(&path, &config).await.unwrap();
        let loaded = repo.load(&path).await.unwrap();

        assert_eq!(loaded, config);
    }
}
