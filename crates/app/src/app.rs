//! Command handling shared by the REPL and the one-shot subcommands.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use req_application::session::HELP;
use req_application::{
    Command, ConfigRepository, DocumentLocator, DocumentOutcome, ExecuteRequest, HttpClient,
    LoadDocument, RunDocuments, Session, SessionError,
};
use req_domain::RequestDocument;
use req_infrastructure::{
    GlobDocumentLocator, ReqwestHttpClient, TokioFileSystem, TomlConfigRepository,
    YamlDocumentDecoder,
};

use crate::error::AppError;
use crate::render;

/// Source of interactive answers for commands that ask questions.
pub trait Prompt {
    /// Shows `prompt` and returns the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn ask(&mut self, prompt: &str) -> Result<String, AppError>;
}

/// Whether the REPL keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Leave the REPL.
    Quit,
}

type Runner<C> = RunDocuments<TokioFileSystem, YamlDocumentDecoder, C>;

/// Loaded configuration, session and wired use cases.
pub struct App<C: HttpClient + ?Sized = ReqwestHttpClient> {
    config_path: PathBuf,
    session: Session,
    repository: TomlConfigRepository<TokioFileSystem>,
    locator: GlobDocumentLocator,
    runner: Runner<C>,
}

impl App<ReqwestHttpClient> {
    /// Loads the config at `config_path` and wires the real HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be parsed or the client cannot be built.
    pub async fn load(config_path: &Path) -> Result<Self, AppError> {
        let client = Arc::new(ReqwestHttpClient::new()?);
        Self::load_with_client(config_path, client).await
    }
}

impl<C: HttpClient + ?Sized> App<C> {
    /// Loads the config at `config_path` and sends requests through `client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be parsed.
    pub async fn load_with_client(config_path: &Path, client: Arc<C>) -> Result<Self, AppError> {
        let repository = TomlConfigRepository::new(TokioFileSystem::new());
        let config = repository.load(config_path).await?;
        tracing::debug!(
            path = %config_path.display(),
            default_env = ?config.default_env,
            "config loaded"
        );

        let runner = RunDocuments::new(
            LoadDocument::new(TokioFileSystem::new(), YamlDocumentDecoder::new()),
            ExecuteRequest::new(client, config.base_url()),
        );

        Ok(Self {
            config_path: config_path.to_path_buf(),
            session: Session::new(config),
            repository,
            locator: GlobDocumentLocator::new(),
            runner,
        })
    }

    /// Returns the session.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Resolves `target` and runs every matching file with the current environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no files match or the current environment is missing.
    /// Failures of individual files are reported in the outcomes instead.
    pub async fn send(&self, target: &str) -> Result<Vec<DocumentOutcome>, AppError> {
        let paths = self.locator.resolve(self.session.config(), target)?;
        let variables = self.session.environment()?;
        Ok(self.runner.run(&paths, &variables).await)
    }

    /// Runs `target` once and prints the results.
    ///
    /// Returns true when every file ran and every assertion passed.
    ///
    /// # Errors
    ///
    /// See [`App::send`].
    pub async fn send_and_print(
        &self,
        target: &str,
        json: bool,
        out: &mut impl Write,
    ) -> Result<bool, AppError> {
        let outcomes = self.send(target).await?;
        if json {
            render::json(out, &outcomes)?;
        } else {
            for outcome in &outcomes {
                render::outcome(out, outcome)?;
            }
        }
        Ok(outcomes.iter().all(DocumentOutcome::passed))
    }

    /// Prints the request files under the config root.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be scanned.
    pub fn list(&self, out: &mut impl Write) -> Result<(), AppError> {
        let documents = self.locator.list(self.session.config())?;
        render::listing(out, &documents)?;
        Ok(())
    }

    /// Executes one REPL command.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped the command. The caller reports it and
    /// keeps the session going.
    pub async fn handle(
        &mut self,
        command: Command,
        prompt: &mut impl Prompt,
        out: &mut impl Write,
    ) -> Result<Flow, AppError> {
        match command {
            Command::Empty => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::List => self.list(out)?,
            Command::Send(target) => {
                self.send_and_print(&target, false, out).await?;
            }
            Command::New => self.send_new(prompt, out).await?,
            Command::Env => render::environment(out, &self.session.environment()?)?,
            Command::EnvSelect(name) => self.session.select_env(&name)?,
            Command::EnvNew(name) => self.persist(|session| session.new_env(&name)).await?,
            Command::EnvSet { key, value } => {
                self.persist(|session| session.set_var(&key, &value)).await?;
            }
            Command::EnvDelete(key) => self.persist(|session| session.delete_var(&key)).await?,
        }
        Ok(Flow::Continue)
    }

    async fn send_new(&self, prompt: &mut impl Prompt, out: &mut impl Write) -> Result<(), AppError> {
        let method = prompt.ask("Method:")?;
        let url = prompt.ask("URL:")?;
        let document = RequestDocument::bare(&method, url)?;

        let outcome = DocumentOutcome {
            path: PathBuf::from("<new>"),
            result: self.runner.run_document(document).await,
        };
        render::outcome(out, &outcome)?;
        Ok(())
    }

    /// Applies `change` to a copy of the session and keeps it only once the
    /// resulting config is saved.
    async fn persist<F>(&mut self, change: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Session) -> Result<(), SessionError>,
    {
        let mut next = self.session.clone();
        change(&mut next)?;
        self.repository.save(&self.config_path, next.config()).await?;
        self.session = next;
        Ok(())
    }
}
