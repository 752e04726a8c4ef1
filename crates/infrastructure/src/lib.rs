//! Req Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod locator;
pub mod persistence;
pub mod serialization;

pub use adapters::ReqwestHttpClient;
pub use locator::GlobDocumentLocator;
pub use persistence::{TokioFileSystem, TomlConfigRepository, parse_config};
pub use serialization::YamlDocumentDecoder;
