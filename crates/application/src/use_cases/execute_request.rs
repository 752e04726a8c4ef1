//! Execute Request Use Case
//!
//! Turns a loaded document into the request put on the wire, performs a single
//! exchange through the `HttpClient` port and returns both sides.

use std::sync::Arc;

use req_domain::{Exchange, OutgoingRequest, RequestDocument};
use thiserror::Error;
use url::Url;

use crate::ports::{HttpClient, HttpClientError};

/// Error type for the execute request use case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecuteRequestError {
    /// The target is neither an absolute URL nor a path.
    #[error("invalid target '{target}': {message}")]
    InvalidTarget {
        /// Target as written after substitution.
        target: String,
        /// Why it was rejected.
        message: String,
    },

    /// The exchange failed in the transport.
    #[error("transport error: {0}")]
    Transport(#[from] HttpClientError),
}

/// Use case for executing request documents.
///
/// # Example
///
/// ```ignore
/// let use_case = ExecuteRequest::new(Arc::new(ReqwestHttpClient::new()?), "http://localhost:8080");
/// let exchange = use_case.execute(&document).await?;
/// ```
pub struct ExecuteRequest<C: HttpClient + ?Sized> {
    client: Arc<C>,
    base_url: String,
}

impl<C: HttpClient + ?Sized> ExecuteRequest<C> {
    /// Creates a new `ExecuteRequest` use case.
    ///
    /// `base_url` is used for targets that are only a path.
    pub fn new(client: Arc<C>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Sends the document's request and returns the exchange.
    ///
    /// # Errors
    ///
    /// Returns `ExecuteRequestError::InvalidTarget` if no URL can be built and
    /// `ExecuteRequestError::Transport` if the exchange fails.
    pub async fn execute(&self, document: &RequestDocument) -> Result<Exchange, ExecuteRequestError> {
        let request = self.prepare(document)?;
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.client.execute(&request).await?;
        tracing::debug!(status = response.status, bytes = response.size(), "received response");

        Ok(Exchange::new(request, response))
    }

    /// Builds the outgoing request without sending it.
    ///
    /// Headers are set verbatim in document order; a later header with the same
    /// name replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns `ExecuteRequestError::InvalidTarget` if no URL can be built.
    pub fn prepare(&self, document: &RequestDocument) -> Result<OutgoingRequest, ExecuteRequestError> {
        let url = self.resolve_target(&document.target)?;
        let mut request = OutgoingRequest::new(document.method, url).with_body(&document.body);
        for (name, value) in &document.headers {
            request.set_header(name, value);
        }
        Ok(request)
    }

    fn resolve_target(&self, target: &str) -> Result<String, ExecuteRequestError> {
        let target = target.trim();
        let invalid = |message: String| ExecuteRequestError::InvalidTarget {
            target: target.to_string(),
            message,
        };

        if target.starts_with("http://") || target.starts_with("https://") {
            return Url::parse(target)
                .map(String::from)
                .map_err(|e| invalid(e.to_string()));
        }

        if target.starts_with('/') {
            let base = Url::parse(&self.base_url)
                .map_err(|e| invalid(format!("base URL '{}': {e}", self.base_url)))?;
            return base
                .join(target)
                .map(String::from)
                .map_err(|e| invalid(e.to_string()));
        }

        Err(invalid(
            "must start with http://, https:// or /".to_string(),
        ))
    }
}
