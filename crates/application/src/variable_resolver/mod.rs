//! Variable resolution module
//!
//! Provides parsing and resolution of `env.<key>` references in strings.
//!
//! # Usage
//!
//! ```
//! use req_application::variable_resolver::VariableResolver;
//! use req_domain::VariableMap;
//!
//! let mut variables = VariableMap::new();
//! variables.insert("host".to_string(), "localhost".to_string());
//!
//! let result = VariableResolver::new(&variables).resolve("http://env.host/api");
//! assert_eq!(result.resolved, "http://localhost/api");
//! ```

pub mod engine;
pub mod parser;

pub use engine::{ResolutionResult, VariableResolver};
pub use parser::{VariableReference, parse_variables};
