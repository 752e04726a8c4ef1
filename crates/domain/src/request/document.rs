//! Request documents.
//!
//! [`DocumentFile`] is the shape a request definition file decodes into.
//! [`RequestDocument`] is the validated form with compiled assertions and
//! substituted variables, ready to be executed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assertion::Assertion;
use crate::error::{DomainError, DomainResult};

use super::HttpMethod;

/// Request headers keyed by name. Names keep the case they were written in.
pub type Headers = BTreeMap<String, String>;

/// Decoded request definition file, before any validation.
///
/// ```yaml
/// request:
///   method: GET
///   target: env.host/ping
///   headers:
///     Accept: text/plain
/// assertions:
///   - name: ok
///     condition: res.code == 200
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFile {
    /// The request to send.
    pub request: RequestSection,
    /// Checks to run on the response.
    #[serde(default)]
    pub assertions: Vec<AssertionSpec>,
}

/// The `request` section of a document file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSection {
    /// HTTP verb, any case.
    pub method: String,
    /// URL or path. `path` and `url` are accepted as older spellings.
    #[serde(alias = "path", alias = "url")]
    pub target: String,
    /// Header values may contain `env.<key>` references.
    #[serde(default)]
    pub headers: Headers,
    /// Raw body, may contain `env.<key>` references.
    #[serde(default)]
    pub body: String,
}

/// One entry of the `assertions` list of a document file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionSpec {
    /// Name used when reporting.
    pub name: String,
    /// Condition in `<left> <comparator> <right>` form.
    pub condition: String,
}

/// A loaded request definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDocument {
    /// HTTP method.
    pub method: HttpMethod,
    /// URL or path after variable substitution.
    pub target: String,
    /// Headers after variable substitution.
    pub headers: Headers,
    /// Body after variable substitution.
    pub body: String,
    /// Compiled assertions in document order.
    pub assertions: Vec<Assertion>,
}

impl RequestDocument {
    /// Builds a document, validating the method and target.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if the method or target is blank, and
    /// `DomainError::UnsupportedMethod` if the method is not an HTTP verb.
    pub fn new(
        method: &str,
        target: impl Into<String>,
        headers: Headers,
        body: impl Into<String>,
        assertions: Vec<Assertion>,
    ) -> DomainResult<Self> {
        let method: HttpMethod = method.parse()?;
        let target = target.into();
        if target.trim().is_empty() {
            return Err(DomainError::EmptyField("target"));
        }

        Ok(Self {
            method,
            target,
            headers,
            body: body.into(),
            assertions,
        })
    }

    /// Builds a bare request with no headers, body, or assertions.
    ///
    /// # Errors
    ///
    /// See [`RequestDocument::new`].
    pub fn bare(method: &str, target: impl Into<String>) -> DomainResult<Self> {
        Self::new(method, target, Headers::new(), String::new(), Vec::new())
    }
}
