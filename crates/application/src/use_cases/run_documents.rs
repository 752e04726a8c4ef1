//! Run Documents Use Case
//!
//! The full pipeline for one or more request files: load, execute, assert.
//! Files in a batch are processed one after another in input order, and a
//! failure in one file never stops the files after it.

use std::path::{Path, PathBuf};

use req_domain::{AssertionReport, Exchange, RequestDocument, VariableMap};
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::execute_request::{ExecuteRequest, ExecuteRequestError};
use super::load_document::{LoadDocument, LoadError};
use super::run_assertions::AssertionRunner;
use crate::ports::{DocumentDecoder, FileSystem, HttpClient};

/// Errors that abort a single document of a batch.
#[derive(Debug, Error)]
pub enum RunError {
    /// The document could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The request could not be sent or the response could not be read.
    #[error(transparent)]
    Execute(#[from] ExecuteRequestError),
}

/// Everything produced by a successful run of one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRun {
    /// The document after substitution.
    pub document: RequestDocument,
    /// The request as sent and the response as received.
    pub exchange: Exchange,
    /// Assertion results in document order.
    pub report: AssertionReport,
}

impl DocumentRun {
    /// Returns true when every assertion passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.report.all_passed()
    }
}

/// Outcome of one file in a batch.
#[derive(Debug, Serialize)]
pub struct DocumentOutcome {
    /// The file that was run.
    pub path: PathBuf,
    /// The run, or the error that stopped it.
    #[serde(serialize_with = "serialize_result")]
    pub result: Result<DocumentRun, RunError>,
}

impl DocumentOutcome {
    /// Returns true when the document ran and every assertion passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.result.as_ref().is_ok_and(DocumentRun::passed)
    }
}

fn serialize_result<S: Serializer>(
    result: &Result<DocumentRun, RunError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Repr<'a> {
        Run(&'a DocumentRun),
        Error(String),
    }

    match result {
        Ok(run) => Repr::Run(run).serialize(serializer),
        Err(e) => Repr::Error(e.to_string()).serialize(serializer),
    }
}

/// Use case for running request files end to end.
pub struct RunDocuments<F, D, C: HttpClient + ?Sized> {
    loader: LoadDocument<F, D>,
    executor: ExecuteRequest<C>,
    runner: AssertionRunner,
}

impl<F, D, C> RunDocuments<F, D, C>
where
    F: FileSystem,
    D: DocumentDecoder,
    C: HttpClient + ?Sized,
{
    /// Creates a new `RunDocuments` use case.
    pub const fn new(loader: LoadDocument<F, D>, executor: ExecuteRequest<C>) -> Self {
        Self {
            loader,
            executor,
            runner: AssertionRunner::new(),
        }
    }

    /// Runs every file in `paths`, in order.
    ///
    /// One outcome is returned per path, in the same order.
    pub async fn run(&self, paths: &[PathBuf], variables: &VariableMap) -> Vec<DocumentOutcome> {
        let mut outcomes = Vec::with_capacity(paths.len());
        for path in paths {
            let result = self.run_file(path, variables).await;
            if let Err(e) = &result {
                tracing::warn!(path = %path.display(), error = %e, "document failed");
            }
            outcomes.push(DocumentOutcome {
                path: path.clone(),
                result,
            });
        }
        outcomes
    }

    /// Loads and runs a single file.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Load` if the file cannot be loaded, in which case no
    /// request is sent, or `RunError::Execute` if the exchange fails.
    pub async fn run_file(&self, path: &Path, variables: &VariableMap) -> Result<DocumentRun, RunError> {
        tracing::info!("Running {}", path.display());
        let document = self.loader.execute(path, variables).await?;
        self.run_document(document).await
    }

    /// Sends an already built document and evaluates its assertions.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Execute` if the exchange fails.
    pub async fn run_document(&self, document: RequestDocument) -> Result<DocumentRun, RunError> {
        let exchange = self.executor.execute(&document).await?;
        let report = self.runner.run(&exchange, &document.assertions);
        Ok(DocumentRun {
            document,
            exchange,
            report,
        })
    }
}
