//! # verdict
//!
//! Predicate-driven assertions with structured failures and first-class
//! async support.
//!
//! Bind a value with [`expect`], then evaluate predicates against it. A
//! predicate is any function of the value returning something classifiable:
//! a `bool`, a reason string, a detailed [`Outcome`] with an
//! expected/actual pair, or a deferred (async) version of any of those.
//!
//! ## Quick start
//!
//! ```
//! use verdict::{expect, predicates::{equal, greater_than}};
//!
//! expect(&42).to_be(equal(42)).now().unwrap();
//! expect(&5).not_to_be(greater_than(10)).now().unwrap();
//!
//! // Any closure over the value is a predicate.
//! expect("hello").to_be(|s: &str| s.starts_with('h')).now().unwrap();
//! ```
//!
//! ## Failures are structured
//!
//! A failing evaluation returns an [`Error`] carrying the reason and, for
//! detailed results, the expected/actual pair with a rendered diff:
//!
//! ```
//! use verdict::{expect, predicates::equal};
//!
//! let err = expect(&41).to_be(equal(42)).now().unwrap_err();
//! let failure = err.failure().unwrap();
//! assert_eq!(failure.expected, Some(serde_json::json!(42)));
//! assert_eq!(failure.actual, Some(serde_json::json!(41)));
//! ```
//!
//! ## Async predicates
//!
//! Deferred predicates are declared with [`deferred`]; the evaluation is
//! then awaited instead of read with `now()`:
//!
//! ```rust,ignore
//! use verdict::{deferred, expect};
//!
//! let eventually_even = deferred(|n: &i32| {
//!     let n = *n;
//!     async move { n % 2 == 0 }
//! });
//! expect(&4).to_be(eventually_even).await?;
//! ```
//!
//! ## Composition
//!
//! [`not_to_be`](Expect::not_to_be) succeeds exactly when the plain
//! evaluation would fail, and [`to_be_either`](Expect::to_be_either) passes
//! if at least one of several predicates does:
//!
//! ```
//! use verdict::{expect, predicates::{greater_than, less_than}};
//!
//! expect(&5)
//!     .to_be_either(&[&greater_than(10), &less_than(6)])
//!     .now()
//!     .unwrap();
//! ```

pub mod error;
pub mod expect;
pub mod outcome;
pub mod predicate;
pub mod predicates;

// Core entry points
pub use expect::{expect, Evaluation, Expect};

// Predicate contract and wrappers
pub use predicate::{deferred, deferred_fallible, fallible, Check, Predicate};

// Result shapes
pub use outcome::Outcome;

// Errors
pub use error::{Error, Failure};
