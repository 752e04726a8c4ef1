//! Binary error types

use req_application::{ConfigError, HttpClientError, LocateError, SessionError};
use req_domain::DomainError;
use thiserror::Error;

/// Errors that stop a command. None of them end the REPL.
#[derive(Debug, Error)]
pub enum AppError {
    /// The config could not be loaded or saved.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// No request files could be found.
    #[error("could not retrieve files: {0}")]
    Locate(#[from] LocateError),

    /// The session rejected an environment command.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// An interactively entered request is invalid.
    #[error("invalid request: {0}")]
    Request(#[from] DomainError),

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] HttpClientError),

    /// Reading input failed.
    #[error("input error: {0}")]
    Input(#[from] rustyline::error::ReadlineError),

    /// Writing output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}
