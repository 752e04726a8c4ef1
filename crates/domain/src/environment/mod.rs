//! Environment and variable domain types

mod store;

pub use store::{EnvironmentError, EnvironmentStore, VariableMap};
