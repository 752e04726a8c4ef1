//! Request file discovery.

mod glob_locator;

pub use glob_locator::GlobDocumentLocator;
