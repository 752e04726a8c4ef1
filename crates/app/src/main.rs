//! req - Main Entry Point

use std::io;
use std::process::ExitCode;

use clap::Parser;
use req_cli::{App, AppError, Cli, CliCommand, repl};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics on stderr, results on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let app = App::load(&cli.config).await?;

    match cli.command {
        None => {
            repl::run(app).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(CliCommand::Send { target, json }) => {
            let passed = app.send_and_print(&target, json, &mut io::stdout()).await?;
            Ok(if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Some(CliCommand::List) => {
            app.list(&mut io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
