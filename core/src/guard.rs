//! Guarded functions: bodies that unwrap containers with a [`Guard`] and short-circuit to the first failure.
//!
//! A guarded body receives a `&Guard<F>`, where `F` is the failure payload of the container the body produces.
//! [`Guard::check`] unwraps a container or produces an [`Abort`] token, which the body propagates with `?`. The
//! boundary that created the guard turns the token back into the failure variant. Aborts never unwind; they are
//! ordinary return values that only a guard can create.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::container::Container;

/// Identity of one guard, unique for the lifetime of the process.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct GuardId(u64);
impl GuardId {
  fn next() -> Self {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    Self(NEXT.fetch_add(1, Ordering::Relaxed))
  }
}

/// What a guarded body returns: its own container, or an abort to be resolved by the boundary.
pub type Guarded<C> = Result<C, Abort<<C as Container>::Failure>>;

/// Unwraps containers inside one invocation of a guarded body.
///
/// Guards are handed out by reference for the duration of a single body invocation and are neither `Send` nor
/// `Sync`.
pub struct Guard<F> {
  id: GuardId,
  _failure: PhantomData<(fn() -> F, *const ())>,
}

impl<F> Guard<F> {
  #[inline]
  fn new() -> Self { Self { id: GuardId::next(), _failure: PhantomData } }

  #[inline]
  pub fn id(&self) -> GuardId { self.id }

  /// Returns the success value of `container`, or an [`Abort`] carrying its failure. Propagate the abort with `?`.
  #[inline]
  pub fn check<C: Container<Failure=F>>(&self, container: C) -> Result<C::Value, Abort<F>> {
    container.into_branch().map_err(|failure| Abort { guard: self.id, failure })
  }

  /// Re-propagates aborts caught by a local handler inside the body, and hands application faults back untouched.
  ///
  /// ```
  /// # use oxide_core::guard::Escape;
  /// # use oxide_core::result;
  /// let mut parse = result::guarded(|guard, input: &str| {
  ///   let attempt: Result<i32, Escape<String, String>> = (|| {
  ///     let number = guard.check(input.parse::<i32>().map_err(|e| e.to_string()))?;
  ///     if number < 0 { return Err(Escape::Fault("negative".to_string())); }
  ///     Ok(number)
  ///   })();
  ///   match attempt {
  ///     Ok(number) => Ok(Ok(number)),
  ///     Err(caught) => {
  ///       let fault = guard.bubble(caught)?;
  ///       Ok(Ok(fault.len() as i32))
  ///     }
  ///   }
  /// });
  /// assert_eq!(parse("-3"), Ok(8));
  /// assert!(parse("x").is_err());
  /// ```
  #[inline]
  pub fn bubble<X>(&self, caught: Escape<F, X>) -> Result<X, Abort<F>> {
    match caught {
      Escape::Abort(abort) => Err(abort),
      Escape::Fault(fault) => Ok(fault),
    }
  }

  fn resolve<C: Container<Failure=F>>(&self, outcome: Result<C, Abort<F>>) -> C {
    match outcome {
      Ok(container) => container,
      Err(abort) if abort.guard == self.id => {
        trace!(guard = self.id.0, "guarded body aborted");
        C::from_failure(abort.failure)
      }
      Err(abort) => panic!("abort from guard {:?} reached the boundary of guard {:?}; guards must not be used outside \
        the invocation that received them", abort.guard, self.id),
    }
  }
}

impl<F> fmt::Debug for Guard<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Guard").field("id", &self.id).finish()
  }
}


/// Short-circuit token created by [`Guard::check`] on a failure variant. Carries the failure payload to the boundary
/// of the guarded body.
#[must_use = "an abort must be propagated to the guarded boundary with `?`"]
pub struct Abort<F> {
  guard: GuardId,
  failure: F,
}
impl<F> Abort<F> {
  /// The guard that created this abort.
  #[inline]
  pub fn guard(&self) -> GuardId { self.guard }
}
impl<F> fmt::Debug for Abort<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Abort").field("guard", &self.guard).finish_non_exhaustive()
  }
}


/// Error type for a local block inside a guarded body that mixes guard checks with its own faults. Guard aborts
/// convert into it with `?`; pass caught values to [`Guard::bubble`] before handling them.
pub enum Escape<F, X> {
  Abort(Abort<F>),
  Fault(X),
}
impl<F, X> From<Abort<F>> for Escape<F, X> {
  #[inline]
  fn from(abort: Abort<F>) -> Self { Self::Abort(abort) }
}
impl<F, X: fmt::Debug> fmt::Debug for Escape<F, X> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Abort(abort) => f.debug_tuple("Abort").field(abort).finish(),
      Self::Fault(fault) => f.debug_tuple("Fault").field(fault).finish(),
    }
  }
}


/// Runs `body` once with a fresh guard, resolving an abort into the failure variant of `C`.
pub fn run<C, B>(body: B) -> C where
  C: Container,
  B: FnOnce(&Guard<C::Failure>) -> Guarded<C>,
{
  let guard = Guard::new();
  let outcome = body(&guard);
  guard.resolve(outcome)
}

/// Turns `body` into a function that runs it with a fresh guard per call. Multiple arguments are passed as a tuple.
pub fn guarded<A, C, B>(mut body: B) -> impl FnMut(A) -> C where
  C: Container,
  B: FnMut(&Guard<C::Failure>, A) -> Guarded<C>,
{
  move |args| run::<C, _>(|guard| body(guard, args))
}
