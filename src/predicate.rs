//! The predicate contract.
//!
//! A [`Predicate`] judges a borrowed value and answers with a [`Check`]:
//! either a result that is available immediately, or a deferred computation
//! that settles later. Whether a predicate is synchronous, asynchronous or
//! fallible is declared through the type system — the engine never inspects
//! results at runtime to guess.
//!
//! Plain closures are predicates out of the box:
//!
//! ```
//! use verdict::expect;
//!
//! let check = |n: &i32| *n % 2 == 0;
//! assert!(expect(&4).to_be(check).now().is_ok());
//! ```
//!
//! Asynchronous predicates are built with [`deferred`]; the returned future
//! must own its captures, so copy what you need out of the value before the
//! async block:
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

use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::outcome::Outcome;

/// A predicate's answer: settled immediately, or pending.
///
/// The `Err` side of the inner result is a foreign error — an error raised
/// by the predicate's own logic rather than a judgment about the value. The
/// engine propagates it verbatim.
pub enum Check {
    Ready(anyhow::Result<Outcome>),
    Deferred(BoxFuture<'static, anyhow::Result<Outcome>>),
}

/// A judgment over values of type `T`.
///
/// Invocation is always eager and synchronous; a [`Check::Deferred`] answer
/// only defers when the *result* becomes available.
pub trait Predicate<T: ?Sized> {
    fn check(&self, value: &T) -> Check;
}

impl<T, F, O> Predicate<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> O,
    O: Into<Outcome>,
{
    fn check(&self, value: &T) -> Check {
        Check::Ready(Ok(self(value).into()))
    }
}

/// A synchronous predicate that can fail with a foreign error.
pub struct Fallible<F>(F);

/// Wrap a closure returning `anyhow::Result<_>` as a predicate.
///
/// An `Err` is not an assertion failure: it propagates to the caller
/// untouched, as [`Error::Foreign`](crate::Error::Foreign).
pub fn fallible<F>(predicate: F) -> Fallible<F> {
    Fallible(predicate)
}

impl<T, F, O> Predicate<T> for Fallible<F>
where
    T: ?Sized,
    F: Fn(&T) -> anyhow::Result<O>,
    O: Into<Outcome>,
{
    fn check(&self, value: &T) -> Check {
        Check::Ready((self.0)(value).map(Into::into))
    }
}

/// An asynchronous predicate.
pub struct Deferred<F>(F);

/// Wrap a future-returning closure as a predicate.
///
/// The closure itself runs eagerly when the evaluation starts; the future it
/// returns is driven when the evaluation is awaited. The future must be
/// `'static`: it owns whatever it needs from the value.
pub fn deferred<F>(predicate: F) -> Deferred<F> {
    Deferred(predicate)
}

impl<T, F, Fut, O> Predicate<T> for Deferred<F>
where
    T: ?Sized,
    F: Fn(&T) -> Fut,
    Fut: Future<Output = O> + Send + 'static,
    O: Into<Outcome>,
{
    fn check(&self, value: &T) -> Check {
        Check::Deferred((self.0)(value).map(|outcome| Ok(outcome.into())).boxed())
    }
}

/// An asynchronous predicate that can fail with a foreign error.
pub struct DeferredFallible<F>(F);

/// Wrap a closure returning a `Future<Output = anyhow::Result<_>>` as a
/// predicate. Combines [`deferred`] and [`fallible`].
pub fn deferred_fallible<F>(predicate: F) -> DeferredFallible<F> {
    DeferredFallible(predicate)
}

impl<T, F, Fut, O> Predicate<T> for DeferredFallible<F>
where
    T: ?Sized,
    F: Fn(&T) -> Fut,
    Fut: Future<Output = anyhow::Result<O>> + Send + 'static,
    O: Into<Outcome>,
{
    fn check(&self, value: &T) -> Check {
        Check::Deferred((self.0)(value).map(|result| result.map(Into::into)).boxed())
    }
}
