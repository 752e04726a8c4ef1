//! Load Document Use Case
//!
//! Reads a request file, decodes it, compiles its assertions and substitutes
//! environment variables into the request fields.

use std::path::{Path, PathBuf};

use req_domain::{
    Assertion, CompileError, DocumentFile, DomainError, Headers, RequestDocument, VariableMap,
};
use thiserror::Error;

use crate::ports::{DecodeError, DocumentDecoder, FileSystem, FileSystemError};
use crate::variable_resolver::VariableResolver;

/// Errors that abort loading a single document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read {path}: {source}")]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying file system error.
        #[source]
        source: FileSystemError,
    },

    /// The file is not a structurally valid request document.
    #[error("could not decode {path}: {underlying}")]
    Decode {
        /// File path.
        path: PathBuf,
        /// Decoder error.
        #[source]
        underlying: DecodeError,
    },

    /// An assertion condition failed to compile.
    #[error("assertion '{assertion_name}' is invalid: {reason}")]
    AssertionCompile {
        /// Name of the offending assertion.
        assertion_name: String,
        /// Why compilation failed.
        #[source]
        reason: CompileError,
    },

    /// The request is not usable after substitution.
    #[error("invalid request in {path}: {source}")]
    InvalidDocument {
        /// File path.
        path: PathBuf,
        /// Validation error.
        #[source]
        source: DomainError,
    },
}

/// Use case for loading request documents from disk.
pub struct LoadDocument<F, D> {
    fs: F,
    decoder: D,
}

impl<F: FileSystem, D: DocumentDecoder> LoadDocument<F, D> {
    /// Creates a new `LoadDocument` use case.
    pub const fn new(fs: F, decoder: D) -> Self {
        Self { fs, decoder }
    }

    /// Loads the document at `path`, substituting from `variables`.
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the file cannot be read or decoded, if any
    /// assertion fails to compile, or if the method or target is invalid.
    pub async fn execute(
        &self,
        path: &Path,
        variables: &VariableMap,
    ) -> Result<RequestDocument, LoadError> {
        let source = self
            .fs
            .read_file_string(path)
            .await
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let file = self
            .decoder
            .decode(&source)
            .map_err(|underlying| LoadError::Decode {
                path: path.to_path_buf(),
                underlying,
            })?;

        build_document(path, file, variables)
    }
}

/// Turns a decoded file into a [`RequestDocument`].
///
/// Every assertion is compiled before anything else so that a document with a
/// bad assertion is rejected whole. Variables are then substituted into the
/// target, the header values and the body.
///
/// # Errors
///
/// Returns `LoadError::AssertionCompile` for the first assertion that fails to
/// compile and `LoadError::InvalidDocument` if the method or target is invalid.
pub fn build_document(
    path: &Path,
    file: DocumentFile,
    variables: &VariableMap,
) -> Result<RequestDocument, LoadError> {
    let assertions = file
        .assertions
        .into_iter()
        .map(|spec| {
            Assertion::compile(&spec.name, spec.condition).map_err(|reason| {
                LoadError::AssertionCompile {
                    assertion_name: spec.name,
                    reason,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for assertion in &assertions {
        tracing::debug!(name = %assertion.name, condition = %assertion.condition, "compiled assertion");
    }

    let resolver = VariableResolver::new(variables);
    let substitute = |field: &str, input: &str| {
        let result = resolver.resolve(input);
        for key in &result.unresolved {
            tracing::warn!(path = %path.display(), field, key = %key, "env.{key} is not set, using empty string");
        }
        result.resolved
    };

    let request = file.request;
    let target = substitute("target", &request.target);
    let headers: Headers = request
        .headers
        .iter()
        .map(|(name, value)| (name.clone(), substitute("headers", value)))
        .collect();
    let body = substitute("body", &request.body);

    RequestDocument::new(&request.method, target, headers, body, assertions).map_err(|source| {
        LoadError::InvalidDocument {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use req_domain::request::{AssertionSpec, RequestSection};
    use req_domain::{Accessor, HttpMethod};
    use std::collections::HashMap;

    struct MemoryFileSystem {
        files: HashMap<PathBuf, String>,
    }

    impl FileSystem for MemoryFileSystem {
        async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))
        }

        async fn write_file(&self, _path: &Path, _contents: &[u8]) -> Result<(), FileSystemError> {
            Ok(())
        }

        async fn exists(&self, path: &Path) -> bool {
            self.files.contains_key(path)
        }
    }

    /// Decoder that ignores the source and returns a fixed result.
    struct FixedDecoder(Result<DocumentFile, DecodeError>);

    impl DocumentDecoder for FixedDecoder {
        fn decode(&self, _source: &str) -> Result<DocumentFile, DecodeError> {
            self.0.clone()
        }
    }

    fn file(target: &str, assertions: &[(&str, &str)]) -> DocumentFile {
        DocumentFile {
            request: RequestSection {
                method: "get".to_string(),
                target: target.to_string(),
                headers: Headers::from([(
                    "Authorization".to_string(),
                    "Bearer env.token".to_string(),
                )]),
                body: "{\"user\": \"env.user\"}".to_string(),
            },
            assertions: assertions
                .iter()
                .map(|(name, condition)| AssertionSpec {
                    name: (*name).to_string(),
                    condition: (*condition).to_string(),
                })
                .collect(),
        }
    }

    fn vars(pairs: &[(&str, &str)]) -> VariableMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_build_substitutes_every_field() {
        let doc = build_document(
            Path::new("ping.yml"),
            file("env.host/ping", &[("ok", "res.code == 200")]),
            &vars(&[("host", "http://localhost:8080"), ("token", "abc"), ("user", "ann")]),
        )
        .unwrap();

        assert_eq!(doc.method, HttpMethod::Get);
        assert_eq!(doc.target, "http://localhost:8080/ping");
        assert_eq!(doc.headers["Authorization"], "Bearer abc");
        assert_eq!(doc.body, "{\"user\": \"ann\"}");
        assert_eq!(doc.assertions.len(), 1);
        assert_eq!(doc.assertions[0].condition.left, Accessor::Code);
    }

    #[test]
    fn test_missing_variables_resolve_to_empty() {
        let doc = build_document(
            Path::new("ping.yml"),
            file("http://localhost/env.path", &[]),
            &VariableMap::new(),
        )
        .unwrap();

        assert_eq!(doc.target, "http://localhost/");
        assert_eq!(doc.headers["Authorization"], "Bearer ");
    }

    #[test]
    fn test_bad_assertion_fails_whole_document() {
        let err = build_document(
            Path::new("ping.yml"),
            file("/ping", &[("ok", "res.code == 200"), ("regex", "res.body =~ po.*")]),
            &VariableMap::new(),
        )
        .unwrap_err();

        match err {
            LoadError::AssertionCompile {
                assertion_name,
                reason,
            } => {
                assert_eq!(assertion_name, "regex");
                assert_eq!(reason, CompileError::UnknownComparator("=~".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_target_empty_after_substitution_is_invalid() {
        let err = build_document(Path::new("x.yml"), file("env.host", &[]), &VariableMap::new())
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidDocument {
                source: DomainError::EmptyField("target"),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_execute_reads_and_decodes() {
        let path = PathBuf::from("requests/ping.yml");
        let fs = MemoryFileSystem {
            files: HashMap::from([(path.clone(), "ignored".to_string())]),
        };
        let use_case = LoadDocument::new(fs, FixedDecoder(Ok(file("/ping", &[]))));

        let doc = use_case.execute(&path, &VariableMap::new()).await.unwrap();
        assert_eq!(doc.target, "/ping");
    }

    #[tokio::test]
    async fn test_execute_reports_decode_error_with_path() {
        let path = PathBuf::from("broken.yml");
        let fs = MemoryFileSystem {
            files: HashMap::from([(path.clone(), "request: [".to_string())]),
        };
        let use_case = LoadDocument::new(fs, FixedDecoder(Err(DecodeError::new("bad yaml"))));

        let err = use_case.execute(&path, &VariableMap::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "could not decode broken.yml: bad yaml");
    }

    #[tokio::test]
    async fn test_execute_reports_missing_file() {
        let fs = MemoryFileSystem {
            files: HashMap::new(),
        };
        let use_case = LoadDocument::new(fs, FixedDecoder(Ok(file("/ping", &[]))));

        let err = use_case
            .execute(Path::new("missing.yml"), &VariableMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }
}
