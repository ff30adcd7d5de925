//! Static helpers for the [`Result`] family.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use tracing::debug;

use crate::aggregate::{AllResults, AnyResult};
use crate::container::{Container, Kind};
use crate::error::Panic;
use crate::guard::{self, Abort, Guard};

/// Whether `container` belongs to the `Result` family.
#[inline]
pub fn is<C: Container>(_container: &C) -> bool { C::KIND == Kind::Result }


/// Runs `f`, turning a panic into `Err` by way of [`Panic::from_payload`].
///
/// `f` is treated as unwind safe: a panic that leaves shared state half-updated is the caller's concern.
pub fn safe<T>(f: impl FnOnce() -> T) -> Result<T, Panic> {
  panic::catch_unwind(AssertUnwindSafe(f)).map_err(caught)
}

/// Polls `future` to completion, turning a panic while polling into `Err`. The returned future never panics on
/// behalf of `future`.
pub fn safe_future<F: Future>(future: F) -> impl Future<Output=Result<F::Output, Panic>> {
  AssertUnwindSafe(future).catch_unwind().map(|result| result.map_err(caught))
}

fn caught(payload: Box<dyn std::any::Any + Send>) -> Panic {
  let panic = Panic::from_payload(payload);
  debug!(%panic, "caught panic");
  panic
}


/// `Ok` of all values of `results` in order, or the first `Err`.
#[inline]
pub fn all<R: AllResults>(results: R) -> Result<R::Values, R::Error> { results.all() }

/// The first `Ok` of `results`, or `Err` of all errors in order.
#[inline]
pub fn any<R: AnyResult>(results: R) -> Result<R::Value, R::Errors> { results.any() }

#[inline]
pub fn all_iter<T, E>(results: impl IntoIterator<Item=Result<T, E>>) -> Result<Vec<T>, E> {
  results.into_iter().collect()
}

pub fn any_iter<T, E>(results: impl IntoIterator<Item=Result<T, E>>) -> Result<T, Vec<E>> {
  let mut errors = Vec::new();
  for result in results {
    match result {
      Ok(value) => return Ok(value),
      Err(error) => errors.push(error),
    }
  }
  Err(errors)
}


/// Runs a guarded `body` once; see [`guard`](crate::guard).
#[inline]
pub fn run<T, E>(body: impl FnOnce(&Guard<E>) -> Result<Result<T, E>, Abort<E>>) -> Result<T, E> {
  guard::run::<Result<T, E>, _>(body)
}

/// Turns a guarded `body` into a function returning `Result<T, E>`; see [`guard`](crate::guard).
///
/// ```
/// # use oxide_core::result;
/// fn check(x: i32) -> Result<i32, &'static str> {
///   if x <= 0 { Err("bad") } else { Ok(x * 10) }
/// }
///
/// let mut f = result::guarded(|guard, x: i32| Ok(Ok(guard.check(check(x))?)));
/// assert_eq!(f(5), Ok(50));
/// assert_eq!(f(-1), Err("bad"));
/// ```
#[inline]
pub fn guarded<A, T, E>(
  body: impl FnMut(&Guard<E>, A) -> Result<Result<T, E>, Abort<E>>
) -> impl FnMut(A) -> Result<T, E> {
  guard::guarded::<A, Result<T, E>, _>(body)
}
