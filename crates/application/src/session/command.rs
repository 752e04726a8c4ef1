//! REPL command tokenizer.
//!
//! A line is split once on the first space into a command word and its
//! argument text:
//! - `send <alias|glob>` - Run request files
//! - `list` - List request files and aliases
//! - `new` - Define and send a request interactively
//! - `env` - Show the current environment
//! - `env-select <name>` - Switch environment
//! - `env-new <name>` - Create an environment and switch to it
//! - `env-set <key> <value>` - Set a variable, the value may contain spaces
//! - `env-delete <key>` - Delete a variable
//! - `h`, `help` - Show help
//! - `q`, `quit`, `exit` - Leave the REPL

use std::str::FromStr;

use thiserror::Error;

/// Error type for command parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognised.
    #[error("unknown command '{0}' (type help for a list)")]
    UnknownCommand(String),

    /// A required argument is missing.
    #[error("{command}: {expected} required")]
    MissingArgument {
        /// The command word.
        command: &'static str,
        /// Description of what is missing.
        expected: &'static str,
    },
}

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the files an alias or glob resolves to.
    Send(String),
    /// List request files.
    List,
    /// Build a request interactively.
    New,
    /// Print the current environment.
    Env,
    /// Switch to an existing environment.
    EnvSelect(String),
    /// Create an environment and switch to it.
    EnvNew(String),
    /// Set a variable in the current environment.
    EnvSet {
        /// Variable name.
        key: String,
        /// Variable value.
        value: String,
    },
    /// Delete a variable from the current environment.
    EnvDelete(String),
    /// Print help.
    Help,
    /// Leave the REPL.
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` for an unknown command word or a missing argument.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }

        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |command: &'static str, expected: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument { command, expected })
            } else {
                Ok(rest.to_string())
            }
        };

        match word {
            "send" => required("send", "alias or glob").map(Self::Send),
            "list" => Ok(Self::List),
            "new" => Ok(Self::New),
            "env" => Ok(Self::Env),
            "env-select" => required("env-select", "environment name").map(Self::EnvSelect),
            "env-new" => required("env-new", "environment name").map(Self::EnvNew),
            "env-set" => {
                let missing = CommandError::MissingArgument {
                    command: "env-set",
                    expected: "key and value",
                };
                let (key, value) = rest.split_once(' ').ok_or(missing)?;
                Ok(Self::EnvSet {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
            "env-delete" => required("env-delete", "key").map(Self::EnvDelete),
            "h" | "help" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Available commands:
  h, help              Display this help message.
  list                 List all available requests including aliases.
  send {alias|glob}    Send a request.
  new                  Interactively define a new request.
  env                  Display all values in the current env.
  env-select {env}     Change the current env.
  env-new {env}        Create a new env and switch to it.
  env-set {key} {val}  Set a value in the current env.
  env-delete {key}     Delete a value from the current env.
  q, quit, exit        Exit the REPL.";
