//! The error taxonomy raised by evaluations.
//!
//! Assertion failures, negation violations, exhausted disjunctions, protocol
//! errors and foreign predicate errors are distinct variants so callers (and
//! the engine itself, during negation) can tell them apart by type alone.

use std::fmt;

use serde_json::Value;
use similar::{ChangeTag, TextDiff};

/// A failed expectation: the reason and, when available, the
/// expected/actual pair.
///
/// `message` is `None` when the predicate failed with a bare `false`;
/// `expected`/`actual` are populated only for detailed results. The
/// `Display` impl renders the human-readable report, including a diff of
/// the pair when present.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub message: Option<String>,
    pub expected: Option<Value>,
    pub actual: Option<Value>,
}

impl Failure {
    pub(crate) fn bare() -> Self {
        Self {
            message: None,
            expected: None,
            actual: None,
        }
    }

    pub(crate) fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            expected: None,
            actual: None,
        }
    }

    pub(crate) fn detailed(message: impl Into<String>, expected: Value, actual: Value) -> Self {
        Self {
            message: Some(message.into()),
            expected: Some(expected),
            actual: Some(actual),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.expected, &self.actual) {
            (None, _, _) => write!(f, "Expectation failed"),
            (Some(message), Some(expected), Some(actual)) => write!(
                f,
                "Expectation failed:\n{}\n{}",
                indent(message, 2),
                indent(&render_diff(expected, actual), 4)
            ),
            (Some(message), _, _) => {
                write!(f, "Expectation failed:\n{}", indent(message, 2))
            }
        }
    }
}

/// Errors raised by [`to_be`](crate::Expect::to_be),
/// [`not_to_be`](crate::Expect::not_to_be) and
/// [`to_be_either`](crate::Expect::to_be_either).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An expectation did not hold.
    #[error("{0}")]
    Failure(Failure),

    /// A negated expectation held when it should not have.
    #[error("Expected to fail, but the assertion passed")]
    UnexpectedPass,

    /// Every branch of a disjunction failed.
    #[error("None of the {attempted} expectations have passed")]
    Exhausted { attempted: usize },

    /// The predicate returned a value outside the recognized shapes.
    ///
    /// This is a defect in the predicate, not a test failure; the offending
    /// raw value is kept for diagnostics.
    #[error("Internal error: the predicate returned an unrecognized value: {0}. Check its implementation")]
    Protocol(Value),

    /// An error raised by the predicate's own logic, unrelated to
    /// classification. Propagated verbatim.
    #[error(transparent)]
    Foreign(#[from] anyhow::Error),
}

impl Error {
    /// The structured failure, if this is an ordinary assertion failure.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Error::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Indent every non-empty line by `spaces` spaces.
pub(crate) fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Side-by-side line diff of the expected and actual values.
fn render_diff(expected: &Value, actual: &Value) -> String {
    let expected = pretty(expected);
    let actual = pretty(actual);
    let diff = TextDiff::from_lines(expected.as_str(), actual.as_str());

    let mut out = String::from("- expected\n+ actual\n\n");
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "- ",
            ChangeTag::Insert => "+ ",
            ChangeTag::Equal => "  ",
        };
        out.push_str(sign);
        out.push_str(change.value());
        if !change.value().ends_with('\n') {
            out.push('\n');
        }
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
