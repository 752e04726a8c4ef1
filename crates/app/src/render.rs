//! Terminal presentation of runs, listings and environments.
//!
//! Everything here writes to stdout-like sinks; diagnostics go through
//! `tracing` to stderr instead.

use std::io::{self, Write};

use req_application::{DocumentOutcome, ListedDocument};
use req_domain::{AssertionReport, ResponseSpec, VariableMap};

/// Prints one document outcome: the response then the assertion lines, or the error.
pub fn outcome(out: &mut impl Write, outcome: &DocumentOutcome) -> io::Result<()> {
    match &outcome.result {
        Ok(run) => {
            response(out, &run.exchange.response)?;
            report(out, &run.report)
        }
        Err(e) => writeln!(out, "ERROR {}: {e}", outcome.path.display()),
    }
}

/// Prints the status line, headers and the body, each indented by a tab.
pub fn response(out: &mut impl Write, response: &ResponseSpec) -> io::Result<()> {
    writeln!(out, "\t{} {}", response.version, response.status_line())?;
    for (name, value) in &response.headers {
        writeln!(out, "\t{name}: {value}")?;
    }
    writeln!(out)?;

    let body = response.body_text();
    if !body.is_empty() {
        writeln!(out, "\t{}", body.replace('\n', "\n\t"))?;
    }
    Ok(())
}

/// Prints one line per assertion followed by a summary.
pub fn report(out: &mut impl Write, report: &AssertionReport) -> io::Result<()> {
    if report.total == 0 {
        return Ok(());
    }

    writeln!(out)?;
    for result in &report.results {
        match &result.message {
            None => writeln!(out, "PASS {}", result.name)?,
            Some(message) => writeln!(out, "FAIL {message}")?,
        }
    }
    writeln!(out, "{}/{} assertions passed", report.passed, report.total)
}

/// Prints request files numbered from 1, with their alias when they have one.
pub fn listing(out: &mut impl Write, documents: &[ListedDocument]) -> io::Result<()> {
    for (i, document) in documents.iter().enumerate() {
        match &document.alias {
            Some(alias) => writeln!(out, "{}: {alias} -> {}", i + 1, document.path.display())?,
            None => writeln!(out, "{}: {}", i + 1, document.path.display())?,
        }
    }
    Ok(())
}

/// Prints `key = value` for each variable.
pub fn environment(out: &mut impl Write, variables: &VariableMap) -> io::Result<()> {
    for (key, value) in variables {
        writeln!(out, "{key} = {value}")?;
    }
    Ok(())
}

/// Prints outcomes as a pretty JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn json(out: &mut impl Write, outcomes: &[DocumentOutcome]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcomes)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use req_domain::{Assertion, Exchange, HttpMethod, OutgoingRequest};
    use std::path::PathBuf;
    use std::time::Duration;

    fn pong() -> ResponseSpec {
        ResponseSpec::new(
            200,
            vec![
                ("content-type".to_string(), "text/plain".to_string()),
                ("set-cookie".to_string(), "a=1".to_string()),
                ("set-cookie".to_string(), "b=2".to_string()),
            ],
            b"pong\nline two".to_vec(),
            Duration::from_millis(2),
        )
        .with_status_text("OK")
        .with_version("HTTP/1.1")
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_response_is_indented() {
        let text = render(|out| response(out, &pong()));
        assert_eq!(
            text,
            "\tHTTP/1.1 200 OK\n\
             \tcontent-type: text/plain\n\
             \tset-cookie: a=1\n\
             \tset-cookie: b=2\n\
             \n\
             \tpong\n\
             \tline two\n"
        );
    }

    #[test]
    fn test_report_lines() {
        let exchange = Exchange::new(OutgoingRequest::new(HttpMethod::Get, "http://x/"), pong());
        let ok = Assertion::compile("status", "res.code == 200").unwrap();
        let bad = Assertion::compile("created", "res.code == 201").unwrap();
        let results = AssertionReport::new(vec![ok.evaluate(&exchange), bad.evaluate(&exchange)]);

        let text = render(|out| report(out, &results));
        assert_eq!(
            text,
            "\nPASS status\nFAIL created failed assertion: \"200\" == \"201\"\n1/2 assertions passed\n"
        );
    }

    #[test]
    fn test_empty_report_prints_nothing() {
        assert_eq!(render(|out| report(out, &AssertionReport::default())), "");
    }

    #[test]
    fn test_listing_numbers_and_aliases() {
        let documents = vec![
            ListedDocument {
                path: PathBuf::from("requests/ping.yml"),
                alias: Some("ping".to_string()),
            },
            ListedDocument {
                path: PathBuf::from("requests/users.yml"),
                alias: None,
            },
        ];

        assert_eq!(
            render(|out| listing(out, &documents)),
            "1: ping -> requests/ping.yml\n2: requests/users.yml\n"
        );
    }

    #[test]
    fn test_environment_lines() {
        let variables = VariableMap::from([
            ("host".to_string(), "localhost".to_string()),
            ("token".to_string(), "abc".to_string()),
        ]);
        assert_eq!(
            render(|out| environment(out, &variables)),
            "host = localhost\ntoken = abc\n"
        );
    }
}
