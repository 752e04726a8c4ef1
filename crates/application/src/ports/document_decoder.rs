//! Document decoder port.

use req_domain::DocumentFile;
use thiserror::Error;

/// A request file could not be decoded into a [`DocumentFile`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct DecodeError {
    /// Decoder message, including the location when the decoder reports one.
    pub message: String,
}

impl DecodeError {
    /// Creates a decode error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Structural decoder for the request file markup.
///
/// Missing required fields and wrong value types must be reported as errors;
/// only headers, body and the assertion list may default to empty.
pub trait DocumentDecoder: Send + Sync {
    /// Decodes the raw file contents.
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` when the input is structurally invalid.
    fn decode(&self, source: &str) -> Result<DocumentFile, DecodeError>;
}
