//! The evaluation engine.
//!
//! [`expect`] binds a value and returns an ephemeral [`Expect`] context with
//! three operations: [`to_be`](Expect::to_be) (plain evaluation),
//! [`not_to_be`](Expect::not_to_be) (negation) and
//! [`to_be_either`](Expect::to_be_either) (disjunction). Each returns an
//! [`Evaluation`] that is settled when every predicate involved answered
//! synchronously, and pending otherwise.
//!
//! ```
//! use verdict::{expect, predicates::greater_than};
//!
//! assert!(expect(&15).to_be(greater_than(10)).now().is_ok());
//! assert!(expect(&5).not_to_be(greater_than(10)).now().is_ok());
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{join_all, BoxFuture};
use futures::FutureExt;

use crate::error::Error;
use crate::outcome::{classify, Classified, Outcome};
use crate::predicate::{Check, Predicate};

/// Bind a value for evaluation.
pub fn expect<T: ?Sized>(value: &T) -> Expect<'_, T> {
    Expect { value }
}

/// An ephemeral evaluation context holding the bound value.
///
/// The context is never mutated and carries no state beyond the borrow; it
/// can be reused for several evaluations of the same value.
pub struct Expect<'v, T: ?Sized> {
    value: &'v T,
}

impl<T: ?Sized> Expect<'_, T> {
    /// Evaluate a predicate against the bound value.
    ///
    /// Passing predicates complete silently; failing ones raise
    /// [`Error::Failure`]. A malformed result raises [`Error::Protocol`],
    /// and an error from the predicate itself propagates verbatim as
    /// [`Error::Foreign`]. The evaluation settles synchronously exactly when
    /// the predicate answers synchronously.
    pub fn to_be<P: Predicate<T>>(&self, predicate: P) -> Evaluation {
        match predicate.check(self.value) {
            Check::Ready(raw) => Evaluation::settled(conclude(raw)),
            Check::Deferred(raw) => Evaluation::deferred(raw.map(conclude)),
        }
    }

    /// Evaluate a predicate, expecting it to fail.
    ///
    /// Succeeds iff the plain evaluation would raise [`Error::Failure`]. An
    /// inner pass raises [`Error::UnexpectedPass`]; protocol and foreign
    /// errors are never swallowed and propagate unchanged.
    pub fn not_to_be<P: Predicate<T>>(&self, predicate: P) -> Evaluation {
        match predicate.check(self.value) {
            Check::Ready(raw) => Evaluation::settled(negate(conclude(raw))),
            Check::Deferred(raw) => Evaluation::deferred(raw.map(|raw| negate(conclude(raw)))),
        }
    }

    /// Evaluate several predicates, succeeding if at least one passes.
    ///
    /// Every predicate is invoked exactly once, in order, before any result
    /// is interpreted. If a synchronously-settled branch passed, the whole
    /// evaluation succeeds synchronously and still-pending branches are
    /// discarded without their outcome ever surfacing. Otherwise pending
    /// branches are awaited concurrently, and the evaluation fails with
    /// [`Error::Exhausted`] once none of them passed. Branch failure
    /// messages are not preserved; a protocol or foreign error in a branch
    /// counts as that branch failing.
    pub fn to_be_either(&self, predicates: &[&dyn Predicate<T>]) -> Evaluation {
        let attempted = predicates.len();
        let mut pending = Vec::new();
        let mut passed_synchronously = false;

        for predicate in predicates {
            match predicate.check(self.value) {
                Check::Ready(raw) => {
                    if conclude(raw).is_ok() {
                        passed_synchronously = true;
                    }
                }
                Check::Deferred(raw) => pending.push(raw.map(conclude)),
            }
        }

        if passed_synchronously {
            return Evaluation::settled(Ok(()));
        }
        if pending.is_empty() {
            return Evaluation::settled(Err(Error::Exhausted { attempted }));
        }

        Evaluation::deferred(async move {
            let settled = join_all(pending).await;
            if settled.iter().any(|branch| branch.is_ok()) {
                Ok(())
            } else {
                Err(Error::Exhausted { attempted })
            }
        })
    }
}

/// Interpret a settled raw answer: classify and build the error to raise.
fn conclude(raw: anyhow::Result<Outcome>) -> Result<(), Error> {
    let outcome = raw.map_err(Error::Foreign)?;
    match classify(outcome)? {
        Classified::Pass => Ok(()),
        Classified::Fail(failure) => Err(Error::Failure(failure)),
    }
}

/// Invert a plain-evaluation conclusion. Applied exactly once per
/// evaluation, so a pending inner result is never classified twice.
fn negate(result: Result<(), Error>) -> Result<(), Error> {
    match result {
        Ok(()) => Err(Error::UnexpectedPass),
        Err(Error::Failure(_)) => Ok(()),
        Err(other) => Err(other),
    }
}

/// The result of an evaluation: settled, or pending on deferred predicates.
///
/// Settled evaluations are read with [`now`](Evaluation::now); pending ones
/// are awaited (`Evaluation` implements `Future`). Awaiting a settled
/// evaluation also works.
pub struct Evaluation {
    inner: Inner,
}

enum Inner {
    Settled(Option<Result<(), Error>>),
    Deferred(BoxFuture<'static, Result<(), Error>>),
}

impl Evaluation {
    fn settled(outcome: Result<(), Error>) -> Self {
        Self {
            inner: Inner::Settled(Some(outcome)),
        }
    }

    fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<(), Error>> + Send + 'static,
    {
        Self {
            inner: Inner::Deferred(future.boxed()),
        }
    }

    /// Whether every predicate involved answered synchronously.
    pub fn is_settled(&self) -> bool {
        matches!(self.inner, Inner::Settled(_))
    }

    /// The outcome of a synchronous evaluation.
    ///
    /// # Panics
    ///
    /// Panics if a predicate deferred its result; await the evaluation
    /// instead.
    pub fn now(self) -> Result<(), Error> {
        match self.inner {
            Inner::Settled(outcome) => outcome.expect("evaluation already consumed"),
            Inner::Deferred(_) => {
                panic!("a predicate deferred its result; await the evaluation instead of calling now()")
            }
        }
    }
}

impl Future for Evaluation {
    type Output = Result<(), Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().inner {
            Inner::Settled(outcome) => {
                Poll::Ready(outcome.take().expect("evaluation polled after completion"))
            }
            Inner::Deferred(future) => future.as_mut().poll(cx),
        }
    }
}
