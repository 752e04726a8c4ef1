//! YAML request document decoder.
//!
//! ```yaml
//! request:
//!   method: POST
//!   target: env.host/users
//!   headers:
//!     Content-Type: application/json
//!   body: '{"name": "env.user"}'
//! assertions:
//!   - name: created
//!     condition: res.code == 201
//! ```

use req_application::ports::{DecodeError, DocumentDecoder};
use req_domain::DocumentFile;

/// Decodes request documents written in YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDocumentDecoder;

impl YamlDocumentDecoder {
    /// Creates a new decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentDecoder for YamlDocumentDecoder {
    fn decode(&self, source: &str) -> Result<DocumentFile, DecodeError> {
        serde_yaml::from_str(source).map_err(|e| DecodeError::new(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_full_document() {
        let file = YamlDocumentDecoder::new()
            .decode(
                r#"
request:
  method: post
  target: env.host/users
  headers:
    Content-Type: application/json
    X-Retry: 3
  body: '{"name": "env.user"}'
assertions:
  - name: created
    condition: res.code == 201
  - name: body
    condition: res.body != hello world
"#,
            )
            .unwrap();

        assert_eq!(file.request.method, "post");
        assert_eq!(file.request.target, "env.host/users");
        assert_eq!(file.request.headers["X-Retry"], "3");
        assert_eq!(file.request.body, r#"{"name": "env.user"}"#);
        assert_eq!(file.assertions.len(), 2);
        assert_eq!(file.assertions[1].condition, "res.body != hello world");
    }

    #[test]
    fn test_headers_body_and_assertions_default_to_empty() {
        let file = YamlDocumentDecoder::new()
            .decode("request:\n  method: GET\n  url: http://localhost:8080/ping\n")
            .unwrap();

        assert_eq!(file.request.target, "http://localhost:8080/ping");
        assert!(file.request.headers.is_empty());
        assert_eq!(file.request.body, "");
        assert!(file.assertions.is_empty());
    }

    #[test]
    fn test_missing_required_fields_fail() {
        let decoder = YamlDocumentDecoder::new();
        assert!(decoder.decode("").is_err());
        assert!(decoder.decode("assertions: []").is_err());
        assert!(decoder.decode("request:\n  target: /ping\n").is_err());
        assert!(decoder
            .decode("request:\n  method: GET\n  target: /ping\nassertions:\n  - name: x\n")
            .is_err());
    }

    #[test]
    fn test_wrong_types_fail() {
        let err = YamlDocumentDecoder::new()
            .decode("request:\n  method: GET\n  target: /ping\n  headers: [a, b]\n")
            .unwrap_err();
        assert!(err.message.contains("invalid type"), "{err}");
    }
}
