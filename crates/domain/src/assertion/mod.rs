//! Response assertions.
//!
//! An [`Assertion`] is a named condition compiled once when its document is
//! loaded and evaluated against any number of exchanges.

mod expression;

pub use expression::{Accessor, Comparator, CompileError, Condition, Evaluation};

use serde::{Deserialize, Serialize};

use crate::exchange::Exchange;

/// A named, compiled check on a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    /// Name used when reporting.
    pub name: String,
    /// The raw condition as written in the document.
    pub source: String,
    /// The compiled condition.
    pub condition: Condition,
}

impl Assertion {
    /// Compiles a condition string into a named assertion.
    ///
    /// # Errors
    ///
    /// Returns the `CompileError` produced by [`Condition::compile`].
    pub fn compile(
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, CompileError> {
        let source = source.into();
        let condition = Condition::compile(&source)?;
        Ok(Self {
            name: name.into(),
            source,
            condition,
        })
    }

    /// Evaluates the assertion against an exchange.
    #[must_use]
    pub fn evaluate(&self, exchange: &Exchange) -> AssertionResult {
        let evaluation = self.condition.evaluate(&exchange.response);
        if evaluation.passed {
            AssertionResult::pass(self, evaluation.actual)
        } else {
            AssertionResult::fail(self, evaluation.actual)
        }
    }
}

/// Result of evaluating a single assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionResult {
    /// Name of the assertion.
    pub name: String,
    /// Whether the assertion passed.
    pub passed: bool,
    /// Value read from the response.
    pub actual: String,
    /// Comparator token.
    pub comparator: String,
    /// Literal the value was compared against.
    pub expected: String,
    /// Description of the mismatch, set only on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AssertionResult {
    fn pass(assertion: &Assertion, actual: String) -> Self {
        Self {
            name: assertion.name.clone(),
            passed: true,
            actual,
            comparator: assertion.condition.comparator.symbol().to_string(),
            expected: assertion.condition.right.clone(),
            message: None,
        }
    }

    fn fail(assertion: &Assertion, actual: String) -> Self {
        let comparator = assertion.condition.comparator.symbol();
        let expected = &assertion.condition.right;
        let message = format!(
            "{} failed assertion: {:?} {} {:?}",
            assertion.name, actual, comparator, expected
        );
        Self {
            name: assertion.name.clone(),
            passed: false,
            actual,
            comparator: comparator.to_string(),
            expected: expected.clone(),
            message: Some(message),
        }
    }
}

/// Results of every assertion in one document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AssertionReport {
    /// Individual results.
    pub results: Vec<AssertionResult>,
    /// Total number of assertions.
    pub total: usize,
    /// Number of passed assertions.
    pub passed: usize,
    /// Number of failed assertions.
    pub failed: usize,
}

impl AssertionReport {
    /// Builds a report from individual results.
    #[must_use]
    pub fn new(results: Vec<AssertionResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            results,
            total,
            passed,
            failed: total - passed,
        }
    }

    /// Returns true when no assertion failed. An empty report passes.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Iterates over failed results.
    pub fn failures(&self) -> impl Iterator<Item = &AssertionResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}
