//! General-purpose value predicates.

use std::fmt;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::outcome::Outcome;
use crate::predicate::Predicate;

/// Passes when the value equals the expected one.
pub fn equal<T>(expected: T) -> impl Predicate<T>
where
    T: PartialEq + Serialize,
{
    move |actual: &T| {
        if *actual == expected {
            Outcome::Pass
        } else {
            Outcome::detailed(
                "Expected values to be equal, but they were not",
                &expected,
                actual,
            )
        }
    }
}

/// Passes when the slice has the expected length.
pub fn with_len<T>(expected: usize) -> impl Predicate<[T]> {
    move |actual: &[T]| {
        if actual.len() == expected {
            Outcome::Pass
        } else {
            Outcome::detailed(
                "The given value had an incorrect length",
                expected,
                actual.len(),
            )
        }
    }
}

/// Passes when the value lies in the inclusive range. The bounds may be
/// given in either order.
pub fn between<T>(min: T, max: T) -> impl Predicate<T>
where
    T: PartialOrd + fmt::Display,
{
    move |actual: &T| {
        let (lo, hi) = if min <= max { (&min, &max) } else { (&max, &min) };
        if *lo <= *actual && *actual <= *hi {
            Outcome::Pass
        } else {
            Outcome::fail_with(format!("Expected {actual} to be in range [{lo}, {hi}]"))
        }
    }
}

/// Passes when the value is strictly greater than the bound.
pub fn greater_than<T>(min: T) -> impl Predicate<T>
where
    T: PartialOrd + fmt::Display,
{
    move |actual: &T| {
        if *actual > min {
            Outcome::Pass
        } else {
            Outcome::fail_with(format!("Expected {actual} to be greater than {min}"))
        }
    }
}

/// Passes when the value is greater than or equal to the bound.
pub fn greater_than_or_equal<T>(min: T) -> impl Predicate<T>
where
    T: PartialOrd + fmt::Display,
{
    move |actual: &T| {
        if *actual >= min {
            Outcome::Pass
        } else {
            Outcome::fail_with(format!("Expected {actual} to be greater than or equal {min}"))
        }
    }
}

/// Passes when the value is strictly less than the bound.
pub fn less_than<T>(max: T) -> impl Predicate<T>
where
    T: PartialOrd + fmt::Display,
{
    move |actual: &T| {
        if *actual < max {
            Outcome::Pass
        } else {
            Outcome::fail_with(format!("Expected {actual} to be less than {max}"))
        }
    }
}

/// Passes when the value is less than or equal to the bound.
pub fn less_than_or_equal<T>(max: T) -> impl Predicate<T>
where
    T: PartialOrd + fmt::Display,
{
    move |actual: &T| {
        if *actual <= max {
            Outcome::Pass
        } else {
            Outcome::fail_with(format!("Expected {actual} to be less than or equal {max}"))
        }
    }
}

/// Passes when the string contains the expected substring.
pub fn containing(expected: impl Into<String>) -> impl Predicate<str> {
    let expected = expected.into();
    move |actual: &str| {
        if actual.contains(&expected) {
            Outcome::Pass
        } else {
            Outcome::detailed(
                "The given value does not contain the expected string",
                &expected,
                actual,
            )
        }
    }
}

/// Passes when the string matches the pattern.
pub fn matching(expected: Regex) -> impl Predicate<str> {
    move |actual: &str| {
        if expected.is_match(actual) {
            Outcome::Pass
        } else {
            Outcome::detailed(
                "The given value was not matched by the expected pattern",
                expected.as_str(),
                actual,
            )
        }
    }
}

/// Passes when the JSON object has the given key.
pub fn with_property(key: impl Into<String>) -> impl Predicate<Value> {
    let key = key.into();
    move |actual: &Value| match actual.as_object() {
        None => Outcome::fail_with("The given value is not an object"),
        Some(map) => {
            if map.contains_key(&key) {
                Outcome::Pass
            } else {
                Outcome::fail_with(format!("The object does not contain the key \"{key}\""))
            }
        }
    }
}

/// Passes when the JSON object holds the expected value at the given key.
pub fn with_property_value(key: impl Into<String>, expected: impl Into<Value>) -> impl Predicate<Value> {
    let key = key.into();
    let expected = expected.into();
    move |actual: &Value| match actual.as_object() {
        None => Outcome::fail_with("The given value is not an object"),
        Some(map) => match map.get(&key) {
            None => Outcome::fail_with(format!("The object does not contain the key \"{key}\"")),
            Some(value) if *value == expected => Outcome::Pass,
            Some(value) => Outcome::detailed(
                format!("The object contains a value other than expected at property \"{key}\""),
                &expected,
                value,
            ),
        },
    }
}

/// Passes when the option holds a value.
pub fn a_some<T>() -> impl Predicate<Option<T>> {
    |actual: &Option<T>| {
        if actual.is_some() {
            Outcome::Pass
        } else {
            Outcome::fail_with("Expected a Some value, but got None")
        }
    }
}

/// Passes when the option is `None`.
pub fn a_none<T: Serialize>() -> impl Predicate<Option<T>> {
    |actual: &Option<T>| match actual {
        None => Outcome::Pass,
        Some(value) => Outcome::detailed("Expected value to be None, but it wasn't", Value::Null, value),
    }
}

/// Passes when the float is NaN.
pub fn a_nan() -> impl Predicate<f64> {
    |actual: &f64| {
        if actual.is_nan() {
            Outcome::Pass
        } else {
            Outcome::fail_with(format!("Expected value to be NaN, but it was {actual}"))
        }
    }
}

/// Passes when the result is `Ok`.
pub fn an_ok<T, E: fmt::Display>() -> impl Predicate<Result<T, E>> {
    |actual: &Result<T, E>| match actual {
        Ok(_) => Outcome::Pass,
        Err(err) => Outcome::fail_with(format!("Expected an Ok value, but got an error: {err}")),
    }
}

/// Passes when the result is `Err`.
pub fn an_err<T, E>() -> impl Predicate<Result<T, E>> {
    |actual: &Result<T, E>| match actual {
        Err(_) => Outcome::Pass,
        Ok(_) => Outcome::fail_with("Expected an Err value, but the result was Ok"),
    }
}

/// Passes when the result is `Err` and its rendered message contains the
/// expected substring.
pub fn err_containing<T, E>(expected: impl Into<String>) -> impl Predicate<Result<T, E>>
where
    E: fmt::Display,
{
    let expected = expected.into();
    move |actual: &Result<T, E>| match actual {
        Ok(_) => Outcome::fail_with("Expected an Err value, but the result was Ok"),
        Err(err) => {
            let rendered = err.to_string();
            if rendered.contains(&expected) {
                Outcome::Pass
            } else {
                Outcome::detailed(
                    "The error does not contain the expected message",
                    &expected,
                    rendered,
                )
            }
        }
    }
}

/// Passes when the result is `Err` and its rendered message matches the
/// pattern.
pub fn err_matching<T, E>(expected: Regex) -> impl Predicate<Result<T, E>>
where
    E: fmt::Display,
{
    move |actual: &Result<T, E>| match actual {
        Ok(_) => Outcome::fail_with("Expected an Err value, but the result was Ok"),
        Err(err) => {
            let rendered = err.to_string();
            if expected.is_match(&rendered) {
                Outcome::Pass
            } else {
                Outcome::fail_with(format!(
                    "The error's message could not be matched by the expected pattern (message: \"{rendered}\")"
                ))
            }
        }
    }
}

/// Passes when both sequences hold the same elements, in any order.
pub fn same_elements_as<T>(expected: Vec<T>) -> impl Predicate<[T]>
where
    T: PartialEq + Serialize,
{
    move |actual: &[T]| {
        let same = actual.len() == expected.len()
            && actual
                .iter()
                .all(|item| expected.iter().any(|other| other == item));
        if same {
            Outcome::Pass
        } else {
            Outcome::detailed(
                "The given sequence does not have the exact same elements as expected",
                &expected,
                actual,
            )
        }
    }
}

/// Passes when the sequence contains every expected element.
pub fn superset_of<T>(expected: Vec<T>) -> impl Predicate<[T]>
where
    T: PartialEq + Serialize,
{
    move |actual: &[T]| {
        let covers = expected
            .iter()
            .all(|item| actual.iter().any(|other| other == item));
        if covers {
            Outcome::Pass
        } else {
            Outcome::detailed(
                "The given sequence is not a superset of the expected elements",
                &expected,
                actual,
            )
        }
    }
}

/// Passes when every element of the sequence appears in the expected set.
pub fn subset_of<T>(expected: Vec<T>) -> impl Predicate<[T]>
where
    T: PartialEq + Serialize,
{
    move |actual: &[T]| {
        let covered = actual
            .iter()
            .all(|item| expected.iter().any(|other| other == item));
        if covered {
            Outcome::Pass
        } else {
            Outcome::detailed(
                "The given sequence is not a subset of the expected elements",
                &expected,
                actual,
            )
        }
    }
}
