//! Assertion runner.
//!
//! Evaluates the compiled assertions of a document against one exchange and
//! collects the results into a report.

use std::time::Instant;

use req_domain::{Assertion, AssertionReport, Exchange};

/// Runs assertions against exchanges.
///
/// Every assertion is evaluated; a failure never stops the ones after it.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssertionRunner;

impl AssertionRunner {
    /// Creates a new runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates `assertions` in order against `exchange`.
    #[must_use]
    pub fn run(&self, exchange: &Exchange, assertions: &[Assertion]) -> AssertionReport {
        let start = Instant::now();
        let results = assertions
            .iter()
            .map(|assertion| {
                let result = assertion.evaluate(exchange);
                if let Some(message) = &result.message {
                    tracing::debug!(name = %result.name, "{message}");
                }
                result
            })
            .collect();

        let report = AssertionReport::new(results);
        tracing::debug!(
            total = report.total,
            failed = report.failed,
            elapsed = ?start.elapsed(),
            "assertions evaluated"
        );
        report
    }
}
