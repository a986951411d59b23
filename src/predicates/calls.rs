//! Predicates over recorded function invocations.
//!
//! The engine never produces or mutates call records; it only consumes them
//! as a read-only slice of [`Call`]s, typically captured by whatever test
//! double the caller uses.

use serde::Serialize;
use serde_json::Value;

use crate::outcome::Outcome;
use crate::predicate::Predicate;

/// One recorded invocation: the arguments it was made with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    pub args: Vec<Value>,
}

impl Call {
    pub fn new(args: Vec<Value>) -> Self {
        Self { args }
    }
}

/// Passes when at least one call was recorded.
pub fn called() -> impl Predicate<[Call]> {
    |actual: &[Call]| {
        if actual.is_empty() {
            Outcome::fail_with(
                "Expected the function to have been called, but it was not called even once",
            )
        } else {
            Outcome::Pass
        }
    }
}

/// Passes when exactly `expected` calls were recorded.
pub fn called_times(expected: usize) -> impl Predicate<[Call]> {
    move |actual: &[Call]| {
        if actual.len() == expected {
            Outcome::Pass
        } else {
            Outcome::detailed(
                "The function was not called the expected amount of times",
                expected,
                actual.len(),
            )
        }
    }
}

/// Passes when some recorded call carries exactly these arguments.
pub fn called_with(args: Vec<Value>) -> impl Predicate<[Call]> {
    move |actual: &[Call]| {
        if actual.iter().any(|call| call.args == args) {
            Outcome::Pass
        } else {
            Outcome::fail_with("The function was never called with the expected arguments")
        }
    }
}

/// Passes when the nth call (1-indexed) carries exactly these arguments.
pub fn nth_called_with(n: usize, args: Vec<Value>) -> impl Predicate<[Call]> {
    move |actual: &[Call]| check_nth(actual, n, &args)
}

/// Passes when the most recent call carries exactly these arguments.
pub fn last_called_with(args: Vec<Value>) -> impl Predicate<[Call]> {
    move |actual: &[Call]| check_nth(actual, actual.len(), &args)
}

fn check_nth(calls: &[Call], n: usize, args: &[Value]) -> Outcome {
    if calls.is_empty() {
        return Outcome::fail_with("The function was never called at all");
    }

    let nth = match n.checked_sub(1).and_then(|i| calls.get(i)) {
        Some(call) => call,
        None => {
            return Outcome::fail_with(format!(
                "The function was never called a {} time (calls: {})",
                ordinal(n),
                calls.len()
            ))
        }
    };

    if nth.args == args {
        Outcome::Pass
    } else {
        let qualifier = if n == calls.len() { " (and last)" } else { "" };
        Outcome::detailed(
            format!(
                "The {}{} call of the function did not match expectations",
                ordinal(n),
                qualifier
            ),
            args,
            &nth.args,
        )
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
