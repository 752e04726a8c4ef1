//! Variable resolution engine
//!
//! Replaces `env.<key>` references with values from the active environment.

use req_domain::VariableMap;

use super::parser::parse_variables;

/// Result of variable resolution for a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The resolved string with all references substituted.
    pub resolved: String,

    /// Keys that were missing and replaced by the empty string.
    pub unresolved: Vec<String>,
}

impl ResolutionResult {
    /// Creates a result for input with no variables.
    #[must_use]
    pub fn no_variables(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            unresolved: Vec::new(),
        }
    }
}

/// Resolves `env.<key>` references against one environment.
///
/// Resolution is a single pass: substituted values are never scanned again,
/// so a value containing `env.` text is inserted literally. A key missing from
/// the environment resolves to the empty string.
#[derive(Debug, Clone, Copy)]
pub struct VariableResolver<'a> {
    variables: &'a VariableMap,
}

impl<'a> VariableResolver<'a> {
    /// Creates a resolver over the given variables.
    #[must_use]
    pub const fn new(variables: &'a VariableMap) -> Self {
        Self { variables }
    }

    /// Resolves all references in the input string.
    #[must_use]
    pub fn resolve(&self, input: &str) -> ResolutionResult {
        let references = parse_variables(input);

        if references.is_empty() {
            return ResolutionResult::no_variables(input);
        }

        let mut unresolved = Vec::new();
        let mut result = String::with_capacity(input.len());
        let mut last_end = 0;

        for var_ref in &references {
            result.push_str(&input[last_end..var_ref.span.start]);

            if let Some(value) = self.variables.get(&var_ref.key) {
                result.push_str(value);
            } else {
                unresolved.push(var_ref.key.clone());
            }

            last_end = var_ref.span.end;
        }

        result.push_str(&input[last_end..]);

        ResolutionResult {
            resolved: result,
            unresolved,
        }
    }
}
