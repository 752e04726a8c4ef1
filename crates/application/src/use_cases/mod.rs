//! Application use cases (business logic orchestration).

mod execute_request;
mod load_document;
mod run_assertions;
mod run_documents;

pub use execute_request::*;
pub use load_document::*;
pub use run_assertions::*;
pub use run_documents::*;
