//! Predicate result shapes and their classification.
//!
//! A predicate answers with an [`Outcome`]. Most predicates build one of the
//! closed variants directly (or just return a `bool` / message string, which
//! convert via `Into<Outcome>`); the [`Outcome::Raw`] variant carries a bare
//! `serde_json::Value` whose shape is only checked at evaluation time, which
//! is how malformed predicate results are detected.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Failure};

/// What a predicate reports about the value it examined.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value satisfied the predicate.
    Pass,
    /// The value did not satisfy the predicate; no reason given.
    Fail,
    /// The value did not satisfy the predicate, with a reason.
    FailWith(String),
    /// Failure with a reason and the expected/actual pair for diffing.
    Detailed {
        message: String,
        expected: Value,
        actual: Value,
    },
    /// A dynamically-shaped result, classified at evaluation time.
    ///
    /// Recognized shapes: `true`, `false`, a string reason, or a
    /// `[message, expected, actual]` triple whose first element is a string.
    /// Anything else is reported as [`Error::Protocol`].
    Raw(Value),
}

impl Outcome {
    /// Build a [`Outcome::Detailed`] from anything serializable.
    ///
    /// Values that cannot be represented as JSON are shown as a placeholder
    /// string so the failure still renders.
    pub fn detailed(
        message: impl Into<String>,
        expected: impl Serialize,
        actual: impl Serialize,
    ) -> Self {
        Outcome::Detailed {
            message: message.into(),
            expected: to_display_value(expected),
            actual: to_display_value(actual),
        }
    }

    /// Build a [`Outcome::FailWith`] from a reason.
    pub fn fail_with(message: impl Into<String>) -> Self {
        Outcome::FailWith(message.into())
    }
}

fn to_display_value(value: impl Serialize) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| Value::String("<unserializable>".into()))
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

impl From<String> for Outcome {
    fn from(message: String) -> Self {
        Outcome::FailWith(message)
    }
}

impl From<&str> for Outcome {
    fn from(message: &str) -> Self {
        Outcome::FailWith(message.to_string())
    }
}

impl From<Value> for Outcome {
    fn from(raw: Value) -> Self {
        Outcome::Raw(raw)
    }
}

/// A classified predicate result: either a pass or a failure to raise.
#[derive(Debug)]
pub(crate) enum Classified {
    Pass,
    Fail(Failure),
}

/// Decide pass/fail for a settled outcome.
///
/// Applies identically to synchronous and deferred results. An unrecognized
/// raw shape is a defect in the predicate, reported as [`Error::Protocol`]
/// rather than as an assertion failure.
pub(crate) fn classify(outcome: Outcome) -> Result<Classified, Error> {
    match outcome {
        Outcome::Pass => Ok(Classified::Pass),
        Outcome::Fail => Ok(Classified::Fail(Failure::bare())),
        Outcome::FailWith(message) => Ok(Classified::Fail(Failure::with_message(message))),
        Outcome::Detailed {
            message,
            expected,
            actual,
        } => Ok(Classified::Fail(Failure::detailed(message, expected, actual))),
        Outcome::Raw(raw) => classify_raw(raw),
    }
}

fn classify_raw(raw: Value) -> Result<Classified, Error> {
    match raw {
        Value::Bool(true) => Ok(Classified::Pass),
        Value::Bool(false) => Ok(Classified::Fail(Failure::bare())),
        Value::String(message) => Ok(Classified::Fail(Failure::with_message(message))),
        Value::Array(items) => match <[Value; 3]>::try_from(items) {
            Ok([Value::String(message), expected, actual]) => {
                Ok(Classified::Fail(Failure::detailed(message, expected, actual)))
            }
            // Triple with a non-string head: not usable as display text.
            Ok(parts) => Err(Error::Protocol(Value::Array(parts.into()))),
            Err(items) => Err(Error::Protocol(Value::Array(items))),
        },
        other => Err(Error::Protocol(other)),
    }
}
