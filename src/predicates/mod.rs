//! Ready-made predicates for common checks.
//!
//! Every function here returns an `impl Predicate<_>` suitable for
//! [`to_be`](crate::Expect::to_be) and friends:
//!
//! ```
//! use verdict::{expect, predicates::{between, containing}};
//!
//! expect(&7).to_be(between(1, 10)).now().unwrap();
//! expect("hello world").to_be(containing("world")).now().unwrap();
//! ```

mod basic;
mod calls;

pub use basic::{
    a_nan, a_none, a_some, an_err, an_ok, between, containing, equal, err_containing,
    err_matching, greater_than, greater_than_or_equal, less_than, less_than_or_equal, matching,
    same_elements_as, subset_of, superset_of, with_len, with_property, with_property_value,
};
pub use calls::{called, called_times, called_with, last_called_with, nth_called_with, Call};

#[cfg(test)]
mod tests;
