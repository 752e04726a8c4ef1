//! Request definition types

mod document;
mod method;

pub use document::{AssertionSpec, DocumentFile, Headers, RequestDocument, RequestSection};
pub use method::HttpMethod;
