//! Req - CLI and REPL front end
//!
//! Wires the infrastructure adapters into the application use cases and
//! presents results on the terminal.

pub mod app;
pub mod cli;
pub mod error;
pub mod render;
pub mod repl;

pub use app::{App, Flow, Prompt};
pub use cli::{Cli, CliCommand};
pub use error::AppError;
