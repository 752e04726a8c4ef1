//! Assertion condition expressions.
//!
//! A condition has the shape `<left> <comparator> <right>`. It is split on the
//! first two spaces, so the right-hand literal may itself contain spaces.
//!
//! ```
//! use req_domain::assertion::{Accessor, Comparator, Condition};
//!
//! let condition = Condition::compile("res.headers.Content-Type == text/plain").unwrap();
//! assert_eq!(condition.left, Accessor::Header("Content-Type".to_string()));
//! assert_eq!(condition.comparator, Comparator::Eq);
//! assert_eq!(condition.right, "text/plain");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::response::ResponseSpec;

/// Prefixes that introduce a response property path.
const RESPONSE_PREFIXES: [&str; 2] = ["res.", "response."];

/// Errors raised while compiling a condition string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The condition does not have three space-separated parts.
    #[error("expected '<left> <comparator> <right>', got '{0}'")]
    MalformedCondition(String),

    /// The left operand is not a supported response property.
    #[error("unsupported operand '{0}'")]
    UnsupportedOperand(String),

    /// The comparator token is not one of `== != > >= < <=`.
    #[error("unknown comparator '{0}'")]
    UnknownComparator(String),
}

/// A property of the response that a condition reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Accessor {
    /// `res.code`: the status code as a decimal string.
    Code,
    /// `res.headers.<name>`: the first value of the header, or empty.
    Header(String),
    /// `res.body`: the whole body as text.
    Body,
}

impl Accessor {
    /// Reads this property from a response.
    #[must_use]
    pub fn read(&self, response: &ResponseSpec) -> String {
        match self {
            Self::Code => response.status.to_string(),
            Self::Header(name) => response.header(name).unwrap_or_default().to_string(),
            Self::Body => response.body_text(),
        }
    }
}

impl FromStr for Accessor {
    type Err = CompileError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unsupported = || CompileError::UnsupportedOperand(token.to_string());

        let path = RESPONSE_PREFIXES
            .iter()
            .find_map(|prefix| token.strip_prefix(prefix))
            .ok_or_else(unsupported)?;

        match path {
            "code" => Ok(Self::Code),
            "body" => Ok(Self::Body),
            _ => match path.split_once('.') {
                Some(("headers", name)) if !name.is_empty() => Ok(Self::Header(name.to_string())),
                _ => Err(unsupported()),
            },
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code => f.write_str("res.code"),
            Self::Header(name) => write!(f, "res.headers.{name}"),
            Self::Body => f.write_str("res.body"),
        }
    }
}

/// Comparison applied between the left value and the right literal.
///
/// Both sides are compared as strings, byte by byte. Numeric-looking values are
/// never coerced, so `"100" > "99"` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
}

impl Comparator {
    /// Returns the token for this comparator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }

    /// Compares two strings lexicographically.
    #[must_use]
    pub fn compare(self, left: &str, right: &str) -> bool {
        match self {
            Self::Eq => left == right,
            Self::Ne => left != right,
            Self::Gt => left > right,
            Self::Ge => left >= right,
            Self::Lt => left < right,
            Self::Le => left <= right,
        }
    }
}

impl FromStr for Comparator {
    type Err = CompileError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "==" => Ok(Self::Eq),
            "!=" => Ok(Self::Ne),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            other => Err(CompileError::UnknownComparator(other.to_string())),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A compiled condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// The response property to read.
    pub left: Accessor,
    /// How to compare.
    pub comparator: Comparator,
    /// The literal to compare against, taken verbatim.
    pub right: String,
}

/// Outcome of evaluating a condition against a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The value read from the response.
    pub actual: String,
    /// Whether the comparison held.
    pub passed: bool,
}

impl Condition {
    /// Compiles a condition string.
    ///
    /// # Errors
    ///
    /// Returns a `CompileError` when the condition is not three parts, the
    /// left operand is not a supported response property, or the comparator
    /// is unknown.
    pub fn compile(source: &str) -> Result<Self, CompileError> {
        let mut parts = source.trim_start().splitn(3, ' ');
        let (Some(left), Some(comparator), Some(right)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CompileError::MalformedCondition(source.to_string()));
        };

        Ok(Self {
            left: left.parse()?,
            comparator: comparator.parse()?,
            right: right.to_string(),
        })
    }

    /// Evaluates the condition against a response.
    #[must_use]
    pub fn evaluate(&self, response: &ResponseSpec) -> Evaluation {
        let actual = self.left.read(response);
        let passed = self.comparator.compare(&actual, &self.right);
        Evaluation { actual, passed }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.comparator, self.right)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn pong() -> ResponseSpec {
        ResponseSpec::new(
            200,
            vec![("Content-Type".to_string(), "text/plain".to_string())],
            b"pong".to_vec(),
            Duration::ZERO,
        )
    }

    #[test]
    fn test_compile_code_condition() {
        let condition = Condition::compile("res.code == 200").unwrap();
        assert_eq!(
            condition,
            Condition {
                left: Accessor::Code,
                comparator: Comparator::Eq,
                right: "200".to_string(),
            }
        );
    }

    #[test]
    fn test_long_prefix_is_accepted() {
        let condition = Condition::compile("response.body != ").unwrap();
        assert_eq!(condition.left, Accessor::Body);
        assert_eq!(condition.comparator, Comparator::Ne);
        assert_eq!(condition.right, "");
    }

    #[test]
    fn test_right_operand_keeps_spaces() {
        let condition = Condition::compile("res.body == hello big world").unwrap();
        assert_eq!(condition.right, "hello big world");
    }

    #[test]
    fn test_header_name_may_contain_dots() {
        let condition = Condition::compile("res.headers.X.Trace.Id == 1").unwrap();
        assert_eq!(condition.left, Accessor::Header("X.Trace.Id".to_string()));
    }

    #[test]
    fn test_unknown_comparator() {
        assert_eq!(
            Condition::compile("res.body =~ pong"),
            Err(CompileError::UnknownComparator("=~".to_string()))
        );
    }

    #[test]
    fn test_unsupported_operands() {
        for token in ["req.code", "resp.code", "res.status", "res.headers", "res.headers.", "code"] {
            assert_eq!(
                Condition::compile(&format!("{token} == 1")),
                Err(CompileError::UnsupportedOperand(token.to_string())),
                "{token}"
            );
        }
    }

    #[test]
    fn test_malformed_condition() {
        assert_eq!(
            Condition::compile("res.code =="),
            Err(CompileError::MalformedCondition("res.code ==".to_string()))
        );
        assert!(matches!(
            Condition::compile(""),
            Err(CompileError::MalformedCondition(_))
        ));
    }

    #[test]
    fn test_comparison_is_lexicographic() {
        assert!(!Comparator::Lt.compare("2", "10"));
        assert!(Comparator::Gt.compare("2", "10"));
        assert!(!Comparator::Gt.compare("100", "99"));
        assert!(Comparator::Ge.compare("abc", "abc"));
        assert!(Comparator::Le.compare("ab", "abc"));
        assert!(Comparator::Ne.compare("200", "201"));
    }

    #[test]
    fn test_evaluate_against_response() {
        let response = pong();

        let code = Condition::compile("res.code == 200").unwrap().evaluate(&response);
        assert_eq!(
            code,
            Evaluation {
                actual: "200".to_string(),
                passed: true
            }
        );

        let header = Condition::compile("res.headers.content-type == text/plain")
            .unwrap()
            .evaluate(&response);
        assert!(header.passed);

        let missing = Condition::compile("res.headers.X-Missing == ")
            .unwrap()
            .evaluate(&response);
        assert!(missing.passed);

        let body = Condition::compile("res.body != pong").unwrap().evaluate(&response);
        assert!(!body.passed);
        assert_eq!(body.actual, "pong");
    }

    #[test]
    fn test_numeric_status_compared_as_string() {
        let condition = Condition::compile("res.code > 99").unwrap();
        let response = ResponseSpec::new(100, Vec::new(), Vec::new(), Duration::ZERO);
        assert!(!condition.evaluate(&response).passed);
    }

    #[test]
    fn test_display_round_trips_source_shape() {
        let condition = Condition::compile("response.headers.Etag <= abc").unwrap();
        assert_eq!(condition.to_string(), "res.headers.Etag <= abc");
    }
}
