//! Alias and glob based document locator.

use std::path::{Component, Path, PathBuf};

use glob::{GlobResult, Pattern};
use req_application::ports::{DocumentLocator, ListedDocument, LocateError};
use req_domain::ReqConfig;

/// Extensions listed as request files.
const DOCUMENT_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Finds request files through config aliases and glob patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobDocumentLocator;

impl GlobDocumentLocator {
    /// Creates a new locator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn expand(pattern: &str) -> Result<Vec<PathBuf>, LocateError> {
        let paths = glob::glob(pattern).map_err(|e| LocateError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.msg.to_string(),
        })?;

        let mut matches = paths
            .map(unreadable)
            .collect::<Result<Vec<_>, _>>()?;
        matches.sort();
        Ok(matches)
    }
}

fn unreadable(entry: GlobResult) -> Result<PathBuf, LocateError> {
    entry.map_err(|e| LocateError::Unreadable {
        path: e.path().to_path_buf(),
        message: e.error().to_string(),
    })
}

/// Drops `.` components so `./a.yml` and `a.yml` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl DocumentLocator for GlobDocumentLocator {
    fn resolve(&self, config: &ReqConfig, target: &str) -> Result<Vec<PathBuf>, LocateError> {
        let target = target.trim();
        if let Some(path) = config.alias(target) {
            tracing::debug!(alias = target, path = %path.display(), "resolved alias");
            return Ok(vec![path.to_path_buf()]);
        }

        let matches = Self::expand(target)?;
        if matches.is_empty() {
            return Err(LocateError::NoMatches(target.to_string()));
        }
        tracing::debug!(pattern = target, count = matches.len(), "expanded glob");
        Ok(matches)
    }

    fn list(&self, config: &ReqConfig) -> Result<Vec<ListedDocument>, LocateError> {
        let root = Pattern::escape(&config.root.to_string_lossy());
        let mut paths = Vec::new();
        for extension in DOCUMENT_EXTENSIONS {
            paths.extend(Self::expand(&format!("{root}/*.{extension}"))?);
        }
        paths.sort();

        let aliases: Vec<(PathBuf, &str)> = config
            .aliases
            .iter()
            .map(|(name, path)| (normalize(path), name.as_str()))
            .collect();

        Ok(paths
            .into_iter()
            .map(|path| {
                let normalized = normalize(&path);
                let alias = aliases
                    .iter()
                    .find(|(target, _)| *target == normalized)
                    .map(|(_, name)| (*name).to_string());
                ListedDocument { path, alias }
            })
            .collect())
    }
}
