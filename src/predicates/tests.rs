//! Tests for the ready-made predicates, driven through the engine.

use super::*;
use crate::error::Error;
use crate::expect::expect;
use regex::Regex;
use serde_json::json;

fn failure_message(result: Result<(), Error>) -> String {
    match result {
        Err(Error::Failure(failure)) => failure.message.unwrap_or_default(),
        other => panic!("expected an assertion failure, got {other:?}"),
    }
}

#[test]
fn equal_passes_and_fails() {
    expect(&42).to_be(equal(42)).now().unwrap();

    match expect(&41).to_be(equal(42)).now() {
        Err(Error::Failure(failure)) => {
            assert_eq!(failure.expected, Some(json!(42)));
            assert_eq!(failure.actual, Some(json!(41)));
        }
        other => panic!("expected a detailed failure, got {other:?}"),
    }
}

#[test]
fn equal_compares_structured_values() {
    let expected = vec![("a", 1), ("b", 2)];
    expect(&vec![("a", 1), ("b", 2)])
        .to_be(equal(expected))
        .now()
        .unwrap();
}

#[test]
fn with_len_reports_the_lengths() {
    let values = [1, 2, 3];
    expect(&values[..]).to_be(with_len(3)).now().unwrap();

    match expect(&values[..]).to_be(with_len(4)).now() {
        Err(Error::Failure(failure)) => {
            assert_eq!(failure.expected, Some(json!(4)));
            assert_eq!(failure.actual, Some(json!(3)));
        }
        other => panic!("expected a detailed failure, got {other:?}"),
    }
}

#[test]
fn between_accepts_swapped_bounds() {
    expect(&5).to_be(between(1, 10)).now().unwrap();
    expect(&5).to_be(between(10, 1)).now().unwrap();

    assert_eq!(
        failure_message(expect(&15).to_be(between(10, 1)).now()),
        "Expected 15 to be in range [1, 10]"
    );
}

#[test]
fn ordering_predicates() {
    assert_eq!(
        failure_message(expect(&5).to_be(greater_than(10)).now()),
        "Expected 5 to be greater than 10"
    );
    expect(&11).to_be(greater_than(10)).now().unwrap();

    expect(&10).to_be(greater_than_or_equal(10)).now().unwrap();
    assert_eq!(
        failure_message(expect(&9).to_be(greater_than_or_equal(10)).now()),
        "Expected 9 to be greater than or equal 10"
    );

    expect(&9).to_be(less_than(10)).now().unwrap();
    assert_eq!(
        failure_message(expect(&10).to_be(less_than(10)).now()),
        "Expected 10 to be less than 10"
    );

    expect(&10).to_be(less_than_or_equal(10)).now().unwrap();
    assert_eq!(
        failure_message(expect(&11).to_be(less_than_or_equal(10)).now()),
        "Expected 11 to be less than or equal 10"
    );
}

#[test]
fn containing_and_matching() {
    expect("hello world").to_be(containing("world")).now().unwrap();
    assert!(expect("hello world").to_be(containing("mars")).now().is_err());

    let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    expect("2026-08-28").to_be(matching(pattern)).now().unwrap();

    let pattern = Regex::new(r"^\d+$").unwrap();
    match expect("not a number").to_be(matching(pattern)).now() {
        Err(Error::Failure(failure)) => {
            assert_eq!(failure.expected, Some(json!(r"^\d+$")));
            assert_eq!(failure.actual, Some(json!("not a number")));
        }
        other => panic!("expected a detailed failure, got {other:?}"),
    }
}

#[test]
fn property_predicates() {
    let object = json!({"name": "socket", "port": 8080});

    expect(&object).to_be(with_property("name")).now().unwrap();
    expect(&object)
        .to_be(with_property_value("port", 8080))
        .now()
        .unwrap();

    assert_eq!(
        failure_message(expect(&object).to_be(with_property("host")).now()),
        "The object does not contain the key \"host\""
    );
    assert_eq!(
        failure_message(expect(&json!([1, 2])).to_be(with_property("name")).now()),
        "The given value is not an object"
    );

    match expect(&object).to_be(with_property_value("port", 9090)).now() {
        Err(Error::Failure(failure)) => {
            assert_eq!(
                failure.message.as_deref(),
                Some("The object contains a value other than expected at property \"port\"")
            );
            assert_eq!(failure.expected, Some(json!(9090)));
            assert_eq!(failure.actual, Some(json!(8080)));
        }
        other => panic!("expected a detailed failure, got {other:?}"),
    }
}

#[test]
fn option_predicates() {
    expect(&Some(1)).to_be(a_some()).now().unwrap();
    expect(&None::<i32>).to_be(a_none()).now().unwrap();

    assert!(expect(&None::<i32>).to_be(a_some()).now().is_err());
    match expect(&Some(7)).to_be(a_none()).now() {
        Err(Error::Failure(failure)) => {
            assert_eq!(failure.expected, Some(json!(null)));
            assert_eq!(failure.actual, Some(json!(7)));
        }
        other => panic!("expected a detailed failure, got {other:?}"),
    }
}

#[test]
fn nan_predicate() {
    expect(&f64::NAN).to_be(a_nan()).now().unwrap();
    assert_eq!(
        failure_message(expect(&1.5).to_be(a_nan()).now()),
        "Expected value to be NaN, but it was 1.5"
    );
}

#[test]
fn result_predicates() {
    let ok: Result<i32, String> = Ok(1);
    let err: Result<i32, String> = Err("disk full: no space left".into());

    expect(&ok).to_be(an_ok()).now().unwrap();
    expect(&err).to_be(an_err()).now().unwrap();
    assert!(expect(&ok).to_be(an_err()).now().is_err());
    assert_eq!(
        failure_message(expect(&err).to_be(an_ok()).now()),
        "Expected an Ok value, but got an error: disk full: no space left"
    );

    expect(&err).to_be(err_containing("disk full")).now().unwrap();
    match expect(&err).to_be(err_containing("timeout")).now() {
        Err(Error::Failure(failure)) => {
            assert_eq!(failure.expected, Some(json!("timeout")));
            assert_eq!(failure.actual, Some(json!("disk full: no space left")));
        }
        other => panic!("expected a detailed failure, got {other:?}"),
    }

    let pattern = Regex::new(r"disk \w+").unwrap();
    expect(&err).to_be(err_matching(pattern)).now().unwrap();
    let pattern = Regex::new(r"network \w+").unwrap();
    assert!(expect(&err).to_be(err_matching(pattern)).now().is_err());
}

#[test]
fn multiset_predicates() {
    let values = [3, 1, 2];

    expect(&values[..])
        .to_be(same_elements_as(vec![1, 2, 3]))
        .now()
        .unwrap();
    assert!(expect(&values[..])
        .to_be(same_elements_as(vec![1, 2]))
        .now()
        .is_err());

    expect(&values[..]).to_be(superset_of(vec![1, 3])).now().unwrap();
    assert!(expect(&values[..])
        .to_be(superset_of(vec![1, 4]))
        .now()
        .is_err());

    expect(&values[..])
        .to_be(subset_of(vec![1, 2, 3, 4]))
        .now()
        .unwrap();
    assert!(expect(&values[..]).to_be(subset_of(vec![1, 2])).now().is_err());
}

#[test]
fn call_record_predicates() {
    let calls = vec![
        Call::new(vec![json!("init"), json!(1)]),
        Call::new(vec![json!("step"), json!(2)]),
        Call::new(vec![json!("done")]),
    ];

    expect(&calls[..]).to_be(called()).now().unwrap();
    expect(&calls[..]).to_be(called_times(3)).now().unwrap();
    expect(&calls[..])
        .to_be(called_with(vec![json!("step"), json!(2)]))
        .now()
        .unwrap();
    expect(&calls[..])
        .to_be(nth_called_with(2, vec![json!("step"), json!(2)]))
        .now()
        .unwrap();
    expect(&calls[..])
        .to_be(last_called_with(vec![json!("done")]))
        .now()
        .unwrap();

    let none: Vec<Call> = Vec::new();
    assert_eq!(
        failure_message(expect(&none[..]).to_be(called()).now()),
        "Expected the function to have been called, but it was not called even once"
    );

    match expect(&calls[..]).to_be(called_times(5)).now() {
        Err(Error::Failure(failure)) => {
            assert_eq!(failure.expected, Some(json!(5)));
            assert_eq!(failure.actual, Some(json!(3)));
        }
        other => panic!("expected a detailed failure, got {other:?}"),
    }

    assert_eq!(
        failure_message(
            expect(&calls[..])
                .to_be(nth_called_with(4, vec![json!("nope")]))
                .now()
        ),
        "The function was never called a 4th time (calls: 3)"
    );

    match expect(&calls[..])
        .to_be(last_called_with(vec![json!("other")]))
        .now()
    {
        Err(Error::Failure(failure)) => {
            assert_eq!(
                failure.message.as_deref(),
                Some("The 3rd (and last) call of the function did not match expectations")
            );
            assert_eq!(failure.expected, Some(json!(["other"])));
            assert_eq!(failure.actual, Some(json!(["done"])));
        }
        other => panic!("expected a detailed failure, got {other:?}"),
    }
}

#[test]
fn predicates_compose_with_negation_and_disjunction() {
    expect(&5).not_to_be(greater_than(10)).now().unwrap();

    let too_big = greater_than(10);
    let too_small = less_than(0);
    let just_right = between(1, 10);
    expect(&5)
        .to_be_either(&[&too_big, &too_small, &just_right])
        .now()
        .unwrap();
}
