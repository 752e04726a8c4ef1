//! Req Domain - Core types
//!
//! This crate defines the domain model for the req HTTP request runner:
//! environments, request documents, assertion expressions, and exchanges.
//! All types here are pure Rust with no I/O dependencies.

pub mod assertion;
pub mod config;
pub mod environment;
pub mod error;
pub mod exchange;
pub mod request;
pub mod response;

pub use assertion::{
    Accessor, Assertion, AssertionReport, AssertionResult, Comparator, CompileError, Condition,
};
pub use config::{DEFAULT_BASE_URL, ReqConfig};
pub use environment::{EnvironmentError, EnvironmentStore, VariableMap};
pub use error::{DomainError, DomainResult};
pub use exchange::{Exchange, OutgoingRequest};
pub use request::{DocumentFile, Headers, HttpMethod, RequestDocument};
pub use response::ResponseSpec;
