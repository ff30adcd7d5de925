//! Static helpers for the [`Option`] family.

use std::future::Future;

use futures::FutureExt;
use tracing::debug;

use crate::aggregate::{AllOptions, AnyOption};
use crate::container::{Container, Kind};
use crate::guard::{self, Abort, Guard};
use crate::result;

/// Whether `container` belongs to the `Option` family.
#[inline]
pub fn is<C: Container>(_container: &C) -> bool { C::KIND == Kind::Option }


/// Runs `f`, turning a panic into `None`. The panic itself is discarded; it is only logged at debug level.
pub fn safe<T>(f: impl FnOnce() -> T) -> Option<T> {
  result::safe(f).map_err(|panic| debug!(%panic, "discarding panic")).ok()
}

/// Polls `future` to completion, turning a panic while polling into `None`.
pub fn safe_future<F: Future>(future: F) -> impl Future<Output=Option<F::Output>> {
  result::safe_future(future).map(Result::ok)
}


/// `Some` of all values of `options` in order, or `None` at the first `None`.
#[inline]
pub fn all<O: AllOptions>(options: O) -> Option<O::Values> { options.all() }

/// The first `Some` of `options`, or `None`.
#[inline]
pub fn any<O: AnyOption>(options: O) -> Option<O::Value> { options.any() }

#[inline]
pub fn all_iter<T>(options: impl IntoIterator<Item=Option<T>>) -> Option<Vec<T>> {
  options.into_iter().collect()
}

#[inline]
pub fn any_iter<T>(options: impl IntoIterator<Item=Option<T>>) -> Option<T> {
  options.into_iter().flatten().next()
}


/// Runs a guarded `body` once; see [`guard`](crate::guard).
#[inline]
pub fn run<T>(body: impl FnOnce(&Guard<()>) -> Result<Option<T>, Abort<()>>) -> Option<T> {
  guard::run::<Option<T>, _>(body)
}

/// Turns a guarded `body` into a function returning `Option<T>`; see [`guard`](crate::guard).
#[inline]
pub fn guarded<A, T>(
  body: impl FnMut(&Guard<()>, A) -> Result<Option<T>, Abort<()>>
) -> impl FnMut(A) -> Option<T> {
  guard::guarded::<A, Option<T>, _>(body)
}
