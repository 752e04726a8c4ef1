//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod config_repository;
mod document_decoder;
mod document_locator;
mod file_system;
mod http_client;

pub use config_repository::{ConfigError, ConfigRepository};
pub use document_decoder::{DecodeError, DocumentDecoder};
pub use document_locator::{DocumentLocator, ListedDocument, LocateError};
pub use file_system::{FileSystem, FileSystemError};
pub use http_client::{HttpClient, HttpClientError, HttpFuture};
