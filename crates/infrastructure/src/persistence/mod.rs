//! File-backed persistence adapters.

mod config_repository;
mod file_system;

pub use config_repository::{TomlConfigRepository, parse_config};
pub use file_system::TokioFileSystem;
