//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A CLI/REPL HTTP request runner.
///
/// With no subcommand an interactive session is started.
#[derive(Debug, Parser)]
#[command(name = "req", version, about)]
pub struct Cli {
    /// Point to a reqrc config file
    #[arg(short, long, default_value = "./.reqrc")]
    pub config: PathBuf,

    /// One-shot command; omit to start the REPL
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// One-shot commands.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum CliCommand {
    /// Send a request by alias or glob
    Send {
        /// Alias from the config, or a glob pattern of request files
        target: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all available requests
    List,
}
