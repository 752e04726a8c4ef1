//! The concrete request that was sent paired with the response received.

use serde::{Deserialize, Serialize};

use crate::request::HttpMethod;
use crate::response::ResponseSpec;

/// A request exactly as it was put on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL the request was sent to.
    pub url: String,
    /// Headers in the order they were set. Later duplicates replaced earlier ones.
    pub headers: Vec<(String, String)>,
    /// Raw body.
    pub body: String,
}

impl OutgoingRequest {
    /// Creates a request with no headers and an empty body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Sets a header, replacing any existing header with the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            *existing = (name, value);
        } else {
            self.headers.push((name, value));
        }
    }

    /// Sets the body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// One request/response round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// The request as sent.
    pub request: OutgoingRequest,
    /// The response as received, with its body fully buffered.
    pub response: ResponseSpec,
}

impl Exchange {
    /// Pairs a sent request with its response.
    #[must_use]
    pub const fn new(request: OutgoingRequest, response: ResponseSpec) -> Self {
        Self { request, response }
    }
}
