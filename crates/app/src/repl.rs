//! Interactive read-eval-print loop.

use std::io::{self, Write};

use req_application::{Command, HttpClient};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::app::{App, Flow, Prompt};
use crate::error::AppError;

/// Line editor with history, also used to answer prompts.
pub struct Editor {
    inner: DefaultEditor,
}

impl Editor {
    /// Creates an editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            inner: DefaultEditor::new()?,
        })
    }

    fn read(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        match self.inner.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.inner.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Prompt for Editor {
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        let line = self.inner.readline(&format!("{prompt} "))?;
        Ok(line.trim().to_string())
    }
}

fn prompt_for<C: HttpClient + ?Sized>(app: &App<C>) -> String {
    match app.session().current_env() {
        Some(env) => format!("[{env}] >> "),
        None => ">> ".to_string(),
    }
}

/// Runs the REPL until `quit` or end of input.
///
/// Command errors are logged and the loop continues.
///
/// # Errors
///
/// Returns an error only if the terminal itself fails.
pub async fn run<C: HttpClient + ?Sized>(mut app: App<C>) -> Result<(), AppError> {
    let mut editor = Editor::new()?;
    let mut stdout = io::stdout();
    writeln!(stdout, "Welcome to the req REPL.\nType help to see available commands.\n")?;

    while let Some(line) = editor.read(&prompt_for(&app))? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::error!("{e}");
                continue;
            }
        };

        match app.handle(command, &mut editor, &mut stdout).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => tracing::error!("{e}"),
        }
        stdout.flush()?;
    }
    Ok(())
}
