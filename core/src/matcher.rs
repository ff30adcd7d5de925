//! Ordered dispatch over [patterns](crate::pattern).
//!
//! Arms are tried top to bottom; the first arm whose pattern matches wins and there is no backtracking. An arm
//! produces either a fixed result or the result of calling its branch. Branches built with [`Arm::some`],
//! [`Arm::ok`], and [`Arm::err`] receive the unwrapped payload; [`Arm::then`] and [`Arm::otherwise`] receive the
//! value itself.
//!
//! ```
//! use oxide_core::matcher::{match_value, Arm};
//! use oxide_core::pattern::some_is;
//!
//! let size = |n: Option<i32>| match_value(n, [
//!   Arm::value(some_is(|n: &i32| *n > 10), "big"),
//!   Arm::otherwise(|_| "small"),
//! ]);
//! assert_eq!(size(Some(20)), "big");
//! assert_eq!(size(Some(5)), "small");
//! assert_eq!(size(None), "small");
//! ```

use std::fmt::{self, Debug};

use crate::container::{Container, ResultExt};
use crate::error::NonExhaustiveMatch;
use crate::pattern::{self, Pattern};

enum Branch<'a, T, R> {
  Value(R),
  Call(Box<dyn FnOnce(T) -> R + 'a>),
}

/// A pattern paired with what to produce when it matches.
pub struct Arm<'a, T, R> {
  pattern: Pattern<'a, T>,
  branch: Branch<'a, T, R>,
}

impl<'a, T: 'a, R: 'a> Arm<'a, T, R> {
  /// Produces `result` when `pattern` matches.
  #[inline]
  pub fn value(pattern: Pattern<'a, T>, result: R) -> Self {
    Self { pattern, branch: Branch::Value(result) }
  }

  /// Calls `f` with the value when `pattern` matches.
  #[inline]
  pub fn then(pattern: Pattern<'a, T>, f: impl FnOnce(T) -> R + 'a) -> Self {
    Self { pattern, branch: Branch::Call(Box::new(f)) }
  }

  /// Default arm: always matches and calls `f` with the value. Arms after it are never reached.
  #[inline]
  pub fn otherwise(f: impl FnOnce(T) -> R + 'a) -> Self {
    Self::then(pattern::any(), f)
  }

  #[inline]
  pub fn pattern(&self) -> &Pattern<'a, T> { &self.pattern }

  #[inline]
  fn produce(self, value: T) -> R {
    match self.branch {
      Branch::Value(result) => result,
      Branch::Call(f) => f(value),
    }
  }
}

impl<'a, T: 'a, R: 'a> Arm<'a, Option<T>, R> {
  /// Calls `f` with the payload of a `Some` whose payload matches `pattern`.
  pub fn some(pattern: Pattern<'a, T>, f: impl FnOnce(T) -> R + 'a) -> Self {
    Self::then(pattern::some(pattern), move |option: Option<T>| {
      // SAFETY: this branch only runs after the `some` shape matched.
      f(unsafe { option.unwrap_value_unchecked() })
    })
  }

  pub fn none(f: impl FnOnce() -> R + 'a) -> Self {
    Self::then(pattern::none(), move |_| f())
  }
}

impl<'a, T: 'a, E: 'a, R: 'a> Arm<'a, Result<T, E>, R> {
  /// Calls `f` with the value of an `Ok` whose value matches `pattern`.
  pub fn ok(pattern: Pattern<'a, T>, f: impl FnOnce(T) -> R + 'a) -> Self {
    Self::then(pattern::ok(pattern), move |result: Result<T, E>| {
      // SAFETY: this branch only runs after the `ok` shape matched.
      f(unsafe { result.unwrap_value_unchecked() })
    })
  }

  /// Calls `f` with the error of an `Err` whose error matches `pattern`.
  pub fn err(pattern: Pattern<'a, E>, f: impl FnOnce(E) -> R + 'a) -> Self {
    Self::then(pattern::err(pattern), move |result: Result<T, E>| {
      // SAFETY: this branch only runs after the `err` shape matched.
      f(unsafe { result.unwrap_err_value_unchecked() })
    })
  }
}

impl<T, R: Debug> Debug for Arm<'_, T, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct("Arm");
    debug.field("pattern", &self.pattern);
    match &self.branch {
      Branch::Value(result) => debug.field("value", result),
      Branch::Call(_) => debug.field("call", &".."),
    };
    debug.finish()
  }
}


/// Dispatches `value` to the first matching arm, or returns [`NonExhaustiveMatch`] when none matches.
pub fn try_match<'a, T: Debug + 'a, R: 'a>(
  value: T,
  arms: impl IntoIterator<Item=Arm<'a, T, R>>,
) -> Result<R, NonExhaustiveMatch> {
  for arm in arms {
    if arm.pattern.matches(&value) {
      return Ok(arm.produce(value));
    }
  }
  Err(NonExhaustiveMatch::new(&value))
}

/// Like [`try_match`], but panics with a [`NonExhaustiveMatch`] payload when no arm matches.
#[track_caller]
pub fn match_value<'a, T: Debug + 'a, R: 'a>(value: T, arms: impl IntoIterator<Item=Arm<'a, T, R>>) -> R {
  try_match(value, arms).unwrap_or_else(|non_exhaustive| non_exhaustive.raise())
}
