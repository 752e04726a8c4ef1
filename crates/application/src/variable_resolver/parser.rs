//! Variable parser for `env.<key>` syntax
//!
//! Parses strings to extract variable references with their positions.

use std::ops::Range;

/// Literal that introduces a variable reference.
pub const REFERENCE_PREFIX: &str = "env.";

/// Represents a parsed variable reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable key (without the `env.` prefix).
    pub key: String,

    /// Byte range in the original string where this reference appears.
    pub span: Range<usize>,
}

impl VariableReference {
    /// Creates a new variable reference.
    #[must_use]
    pub fn new(key: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            key: key.into(),
            span,
        }
    }
}

/// Returns true for characters allowed in a variable key.
#[must_use]
pub const fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Parses a string and extracts all variable references.
///
/// A reference is `env.` followed by one or more key characters
/// (`[A-Za-z0-9_-]`). The key ends at the first other character, so
/// `env.host/ping` references `host`. `env.` preceded by a letter, digit or
/// underscore is part of a longer word and is not a reference.
///
/// # Examples
///
/// ```
/// use req_application::variable_resolver::parser::parse_variables;
///
/// let refs = parse_variables("https://env.host/users/env.user_id");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].key, "host");
/// assert_eq!(refs[1].key, "user_id");
/// ```
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference> {
    let mut references = Vec::new();
    let mut last_end = 0;

    for (start, _) in input.match_indices(REFERENCE_PREFIX) {
        if start < last_end {
            continue;
        }

        let preceded_by_word = input[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
        if preceded_by_word {
            continue;
        }

        let key_start = start + REFERENCE_PREFIX.len();
        let key_len: usize = input[key_start..]
            .chars()
            .take_while(|c| is_key_char(*c))
            .map(char::len_utf8)
            .sum();
        if key_len == 0 {
            continue;
        }

        let end = key_start + key_len;
        references.push(VariableReference::new(&input[key_start..end], start..end));
        last_end = end;
    }

    references
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(input: &str) -> Vec<String> {
        parse_variables(input).into_iter().map(|r| r.key).collect()
    }

    #[test]
    fn test_parse_simple_variable() {
        let refs = parse_variables("env.host");
        assert_eq!(refs, vec![VariableReference::new("host", 0..8)]);
    }

    #[test]
    fn test_key_stops_at_non_key_char() {
        let refs = parse_variables("http://env.host:8080/env.path?x=1");
        assert_eq!(keys("http://env.host:8080/env.path?x=1"), vec!["host", "path"]);
        assert_eq!(&"http://env.host:8080/env.path?x=1"[refs[0].span.clone()], "env.host");
    }

    #[test]
    fn test_key_stops_at_dot() {
        assert_eq!(keys("env.sub.domain"), vec!["sub"]);
    }

    #[test]
    fn test_adjacent_variables() {
        assert_eq!(keys("env.a/env.b env.c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_prefix_inside_word_is_ignored() {
        assert!(parse_variables("myenv.host").is_empty());
        assert!(parse_variables("dev_env.host").is_empty());
        assert_eq!(keys("\"env.token\""), vec!["token"]);
    }

    #[test]
    fn test_empty_key_is_ignored() {
        assert!(parse_variables("env.").is_empty());
        assert!(parse_variables("env./x").is_empty());
    }

    #[test]
    fn test_no_variables() {
        assert!(parse_variables("Hello, World!").is_empty());
        assert!(parse_variables("environment").is_empty());
        assert_eq!(keys("Bearer env.token"), vec!["token"]);
    }

    #[test]
    fn test_variable_in_json() {
        assert_eq!(
            keys(r#"{"name": "env.user_name", "id": env.id}"#),
            vec!["user_name", "id"]
        );
    }

    #[test]
    fn test_non_ascii_text_around_reference() {
        let input = "héllo env.name ✓";
        let refs = parse_variables(input);
        assert_eq!(refs.len(), 1);
        assert_eq!(&input[refs[0].span.clone()], "env.name");
    }
}
