//! REPL session: explicit state plus the command tokenizer.

mod command;
mod state;

pub use command::{Command, CommandError, HELP};
pub use state::{Session, SessionError};
