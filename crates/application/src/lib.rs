//! Req Application - Use cases and ports
//!
//! This crate holds the engine of the req request runner: the ports the
//! adapters implement, variable substitution, the load, execute and assert
//! use cases, and the REPL session model.

pub mod ports;
pub mod session;
pub mod use_cases;
pub mod variable_resolver;

pub use ports::{
    ConfigError, ConfigRepository, DecodeError, DocumentDecoder, DocumentLocator, FileSystem,
    FileSystemError, HttpClient, HttpClientError, HttpFuture, ListedDocument, LocateError,
};
pub use session::{Command, CommandError, Session, SessionError};
pub use use_cases::{
    AssertionRunner, DocumentOutcome, DocumentRun, ExecuteRequest, ExecuteRequestError,
    LoadDocument, LoadError, RunDocuments, RunError, build_document,
};
pub use variable_resolver::{ResolutionResult, VariableResolver};
